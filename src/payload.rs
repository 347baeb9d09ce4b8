// payload.rs

use serde::Serialize;

use crate::{Config, Reading};

/// Upper bound for the serialized document. The shape is fixed by the struct
/// below (four scalar/short-string fields) so this never needs to grow.
pub const PAYLOAD_CAPACITY: usize = 200;

/// The upload document. Key names and order are wire contract, fixed by the
/// field declaration order here.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    pub api_key: &'a str,
    pub device_id: &'a str,
    pub temperature_c: f32,
    pub temperature_f: f32,
}

impl<'a> Payload<'a> {
    pub fn new(config: &'a Config, reading: &Reading) -> Self {
        Self {
            api_key: &config.api_key,
            device_id: &config.device_id,
            temperature_c: reading.temperature_c,
            temperature_f: reading.temperature_f,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let mut buf = Vec::with_capacity(PAYLOAD_CAPACITY);
        serde_json::to_writer(&mut buf, self)?;
        Ok(String::from_utf8(buf)?)
    }
}


// EOF
