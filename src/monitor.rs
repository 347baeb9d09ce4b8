// monitor.rs

use std::time::Duration;

use log::*;

use crate::{Config, Network, Payload, TempSensor, Uploader};

/// The single binary-state output a human can watch: blinking while the
/// device associates, held steady once it is on the network.
pub trait Indicator {
    fn toggle(&mut self);
    fn set(&mut self, on: bool);
}

/// Blocking sleep hook. FreeRTOS delay on hardware, a recording fake in tests
/// so no real time passes.
pub trait Delay {
    fn sleep(&mut self, duration: Duration);
}

/// What one steady-state cycle did. `run` ignores this; tests and logs use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Probe handed back the disconnected sentinel, upload skipped.
    SensorInvalid,
    /// Network was down at upload time, upload skipped.
    Offline,
    /// Server answered with this status code, 2xx or not.
    Uploaded(u16),
    /// Transport-level POST failure, or the payload would not serialize.
    UploadFailed,
}

/// The whole program: a linear sample-and-send cycle running forever.
///
/// Every collaborator is owned explicitly and moved in at construction, so
/// tests substitute scripted doubles for the probe, the radio, the HTTP
/// client, the LED and the clock.
pub struct Monitor<S, N, U, I, D> {
    config: Config,
    sensor: S,
    net: N,
    uploader: U,
    indicator: I,
    delay: D,
}

impl<S, N, U, I, D> Monitor<S, N, U, I, D>
where
    S: TempSensor,
    N: Network,
    U: Uploader,
    I: Indicator,
    D: Delay,
{
    pub fn new(config: Config, sensor: S, net: N, uploader: U, indicator: I, delay: D) -> Self {
        Self {
            config,
            sensor,
            net,
            uploader,
            indicator,
            delay,
        }
    }

    /// Startup phase: kick off association, then poll until the network is up,
    /// blinking the indicator so an operator sees liveness. There is no
    /// timeout; this blocks until association succeeds or the device is reset.
    pub fn connect(&mut self) -> anyhow::Result<()> {
        info!("Connecting to Wi-Fi {ssid}...", ssid = self.config.wifi_ssid);
        self.net.begin()?;

        while !self.net.is_connected() {
            self.delay.sleep(self.config.connect_poll_delay);
            self.indicator.toggle();
        }

        self.indicator.set(true);
        info!("Wi-Fi connected.");
        Ok(())
    }

    /// One steady-state iteration: read, build, upload, sleep. Every failure
    /// mode is logged and left for the next cycle to recover from.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        let reading = self.sensor.read();
        if !reading.valid {
            error!("Could not read temperature data");
            self.delay.sleep(self.config.sensor_retry_delay);
            return CycleOutcome::SensorInvalid;
        }

        info!(
            "Temperature: {c:.2} C / {f:.2} F",
            c = reading.temperature_c,
            f = reading.temperature_f
        );

        let outcome = match Payload::new(&self.config, &reading).to_json() {
            Err(e) => {
                error!("Cannot serialize payload: {e}");
                CycleOutcome::UploadFailed
            }
            Ok(body) => {
                if self.net.is_connected() {
                    match self.uploader.post(&self.config.upload_url, &body) {
                        Ok(resp) => {
                            info!("HTTP response code: {status}", status = resp.status);
                            info!("{body}", body = resp.body);
                            CycleOutcome::Uploaded(resp.status)
                        }
                        Err(e) => {
                            error!("Error on sending POST: {e}");
                            CycleOutcome::UploadFailed
                        }
                    }
                } else {
                    error!("Wi-Fi disconnected, skipping upload");
                    CycleOutcome::Offline
                }
            }
        };

        self.delay.sleep(self.config.report_interval);
        outcome
    }

    /// Steady state. Never exits except by device reset or power loss.
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }
}


// EOF
