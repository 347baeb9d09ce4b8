// bin/poolmon.rs

#[cfg(target_os = "espidf")]
esp_idf_sys::esp_app_desc!();

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_hal::gpio::{IOPin, OutputPin, Pull};
    use esp_idf_hal::prelude::Peripherals;
    use esp_idf_svc::{eventloop::EspSystemEventLoop, hal::gpio, nvs::EspDefaultNvsPartition};
    use log::*;
    use one_wire_bus::OneWire;
    use poolmon::*;

    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("poolmon {FW_VERSION} starting up.");

    let config = Config::default();
    info!(
        "Reporting as {id} to {url} every {secs}s",
        id = config.device_id,
        url = config.upload_url,
        secs = config.report_interval.as_secs()
    );

    let sysloop = EspSystemEventLoop::take()?;
    let nvs_default_partition = EspDefaultNvsPartition::take()?;
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    // DS18B20 data line on gpio4, built-in LED on gpio2
    let mut probe_pin = pins.gpio4.downgrade();
    let mut pin_drv = gpio::PinDriver::input_output_od(&mut probe_pin)?;
    pin_drv.set_pull(Pull::Up)?;
    let bus = OneWire::new(pin_drv).map_err(|e| anyhow::anyhow!("1-wire init failed: {e:?}"))?;
    let sensor = Ds18b20Sensor::new(bus);

    let net = EspNetwork::new(peripherals.modem, sysloop, nvs_default_partition, &config)?;
    let led = Led::new(pins.gpio2.downgrade_output())?;

    let mut monitor = Monitor::new(config, sensor, net, EspUploader::new(), led, FreeRtosDelay);

    // blocks until association succeeds, or forever
    monitor.connect()?;

    info!("Entering main loop...");
    monitor.run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("poolmon only runs on ESP32 hardware; build for the espidf target");
}

// EOF
