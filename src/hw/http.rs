// hw/http.rs

use embedded_svc::{
    http::{client::Client, Method, Status},
    io::{Read, Write},
};
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

use crate::{HttpResponse, UploadError, Uploader};

const RESPONSE_BUF_SIZE: usize = 512;

/// HTTP client against the cloud ingest endpoint. Opens and closes a fresh
/// connection per call; the global certificate bundle is attached so https
/// endpoints verify.
pub struct EspUploader;

impl EspUploader {
    pub fn new() -> Self {
        Self
    }

    fn connection() -> Result<EspHttpConnection, UploadError> {
        EspHttpConnection::new(&Configuration {
            use_global_ca_store: true,
            crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
            ..Default::default()
        })
        .map_err(|e| UploadError::Connect(e.to_string()))
    }
}

impl Default for EspUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl Uploader for EspUploader {
    fn post(&mut self, url: &str, body: &str) -> Result<HttpResponse, UploadError> {
        let mut client = Client::wrap(Self::connection()?);

        let content_length = body.len().to_string();
        let headers = [
            ("Content-Type", "application/json"),
            ("Content-Length", content_length.as_str()),
        ];

        let mut request = client
            .request(Method::Post, url, &headers)
            .map_err(|e| UploadError::Request(e.to_string()))?;
        request
            .write_all(body.as_bytes())
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let mut response = request
            .submit()
            .map_err(|e| UploadError::Response(e.to_string()))?;
        let status = response.status();

        let mut body = Vec::new();
        let mut buf = [0u8; RESPONSE_BUF_SIZE];
        loop {
            let n = response
                .read(&mut buf)
                .map_err(|e| UploadError::Response(e.to_string()))?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buf[..n]);
        }

        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

// EOF
