// hw/wifi.rs

use anyhow::anyhow;
use embedded_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};
use esp_idf_svc::{
    eventloop::EspSystemEventLoop, hal::modem::Modem, nvs::EspDefaultNvsPartition, wifi::EspWifi,
};
use log::*;

use crate::{Config, Network};

/// Station-mode Wi-Fi. Association is started once at boot and then only
/// polled; there is no reconnect-on-drop, the next report cycle just skips
/// its upload while the link is down.
pub struct EspNetwork {
    wifi: EspWifi<'static>,
}

impl EspNetwork {
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
        config: &Config,
    ) -> anyhow::Result<Self> {
        let mut wifi = EspWifi::new(modem, sysloop, Some(nvs))?;

        let auth_method = if config.wifi_pass.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPAWPA2Personal
        };

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: config
                .wifi_ssid
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("wifi ssid too long"))?,
            password: config
                .wifi_pass
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("wifi password too long"))?,
            auth_method,
            ..Default::default()
        }))?;

        Ok(Self { wifi })
    }
}

impl Network for EspNetwork {
    fn begin(&mut self) -> anyhow::Result<()> {
        info!("Wi-Fi driver starting...");
        self.wifi.start()?;
        self.wifi.connect()?;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.wifi.is_up().unwrap_or(false)
    }
}

// EOF
