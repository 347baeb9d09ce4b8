// upload.rs

use std::fmt;

/// Whatever the server answered with. Any positive status counts as a
/// completed upload at this layer, 2xx or not; the loop controller only logs
/// the code and body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

// Transport-level failures only; an HTTP error status is not an UploadError.
#[derive(Clone, Debug)]
pub enum UploadError {
    Connect(String),
    Request(String),
    Response(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Connect(e) => write!(f, "connect failed: {e}"),
            UploadError::Request(e) => write!(f, "request failed: {e}"),
            UploadError::Response(e) => write!(f, "response failed: {e}"),
        }
    }
}

impl std::error::Error for UploadError {}

/// One short-lived POST per call, no pooling, no keep-alive, no retry.
pub trait Uploader {
    fn post(&mut self, url: &str, body: &str) -> Result<HttpResponse, UploadError>;
}

// EOF
