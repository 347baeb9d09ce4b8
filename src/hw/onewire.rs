// hw/onewire.rs

use embedded_hal::digital::{InputPin, OutputPin};
use esp_idf_hal::delay::{Ets, FreeRtos};
use log::*;
use one_wire_bus::{OneWire, OneWireError};

use crate::{Reading, TempSensor};

// In addition to the bus errors it can happen that no device answers the
// search at all, so we extend the error cases for proper error handling.
#[derive(Debug)]
pub enum MeasurementError<E> {
    OneWireError(OneWireError<E>),
    NoDeviceFound,
}

impl<E> From<OneWireError<E>> for MeasurementError<E> {
    fn from(value: OneWireError<E>) -> Self {
        MeasurementError::OneWireError(value)
    }
}

/// The DS18B20 probe on the one-wire bus. Reads the first device found,
/// single probe per bus by deployment.
pub struct Ds18b20Sensor<P> {
    bus: OneWire<P>,
}

impl<P, E> Ds18b20Sensor<P>
where
    P: OutputPin<Error = E> + InputPin<Error = E>,
    E: core::fmt::Debug,
{
    pub fn new(bus: OneWire<P>) -> Self {
        Self { bus }
    }

    fn read_celsius(&mut self) -> Result<f32, MeasurementError<E>> {
        ds18b20::start_simultaneous_temp_measurement(&mut self.bus, &mut Ets)?;
        ds18b20::Resolution::Bits12.delay_for_measurement_time(&mut FreeRtos);

        match self.bus.device_search(None, false, &mut Ets)? {
            None => Err(MeasurementError::NoDeviceFound),
            Some((device_address, _)) => {
                let sensor = ds18b20::Ds18b20::new::<E>(device_address)?;
                let sensor_data = sensor.read_data(&mut self.bus, &mut Ets)?;
                Ok(sensor_data.temperature)
            }
        }
    }
}

impl<P, E> TempSensor for Ds18b20Sensor<P>
where
    P: OutputPin<Error = E> + InputPin<Error = E>,
    E: core::fmt::Debug,
{
    fn read(&mut self) -> Reading {
        match self.read_celsius() {
            Ok(c) => Reading::from_celsius(c),
            Err(e) => {
                warn!("1-wire read failed: {e:?}");
                Reading::invalid()
            }
        }
    }
}

// EOF
