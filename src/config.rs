// config.rs

use std::time::Duration;

pub const DEVICE_ID: &str = "pool-monitor-01";

const DEFAULT_REPORT_INTERVAL_S: u64 = 60;
const DEFAULT_SENSOR_RETRY_S: u64 = 2;
const DEFAULT_CONNECT_POLL_MS: u64 = 500;

/// Everything is baked in at build time, see build.rs. The device keeps no
/// runtime settings store: a credential change means a rebuild and reflash.
#[derive(Clone, Debug)]
pub struct Config {
    pub wifi_ssid: String,
    pub wifi_pass: String,

    pub api_key: String,
    pub upload_url: String,
    pub device_id: String,

    pub report_interval: Duration,
    pub sensor_retry_delay: Duration,
    pub connect_poll_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wifi_ssid: option_env!("WIFI_SSID").unwrap_or("internet").into(),
            wifi_pass: option_env!("WIFI_PASS").unwrap_or("password").into(),

            api_key: option_env!("API_KEY").unwrap_or("changeme").into(),
            upload_url: option_env!("UPLOAD_URL")
                .unwrap_or("https://example.invalid/ingest")
                .into(),
            device_id: DEVICE_ID.into(),

            report_interval: Duration::from_secs(DEFAULT_REPORT_INTERVAL_S),
            sensor_retry_delay: Duration::from_secs(DEFAULT_SENSOR_RETRY_S),
            connect_poll_delay: Duration::from_millis(DEFAULT_CONNECT_POLL_MS),
        }
    }
}

// EOF
