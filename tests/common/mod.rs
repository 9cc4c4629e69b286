// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{DocsDir, WELLNESS_MD};
#[allow(unused_imports)]
pub use helpers::{create_test_services, reconstruct, segment_texts};
