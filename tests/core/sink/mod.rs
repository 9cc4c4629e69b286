//! Sink layer tests

mod test_http_upload;
