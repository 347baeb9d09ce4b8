// sensor.rs

/// Sentinel the Dallas probe driver hands back for Celsius when the sensor is
/// unreachable on the bus.
pub const DISCONNECTED_C: f32 = -127.0;

/// One temperature sample. Produced fresh each cycle and discarded at the end
/// of it, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub temperature_c: f32,
    pub temperature_f: f32,
    pub valid: bool,
}

impl Reading {
    /// A reading that carries the disconnected sentinel is invalid and the
    /// paired Fahrenheit value must not be trusted either.
    pub fn from_celsius(temperature_c: f32) -> Self {
        if temperature_c == DISCONNECTED_C {
            Self::invalid()
        } else {
            Self {
                temperature_c,
                temperature_f: celsius_to_fahrenheit(temperature_c),
                valid: true,
            }
        }
    }

    pub fn invalid() -> Self {
        Self {
            temperature_c: DISCONNECTED_C,
            temperature_f: DISCONNECTED_C,
            valid: false,
        }
    }
}

pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 9.0 / 5.0 + 32.0
}

/// The probe behind the loop. One blocking conversion per call, no retry here:
/// a failed read is reported upward once per cycle as an invalid Reading.
pub trait TempSensor {
    fn read(&mut self) -> Reading;
}


// EOF
