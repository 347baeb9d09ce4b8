// hw/gpio.rs

use std::time::Duration;

use esp_idf_hal::{
    delay::FreeRtos,
    gpio::{AnyOutputPin, Output, PinDriver},
};

use crate::{Delay, Indicator};

/// The built-in LED, used as the connection indicator.
pub struct Led {
    pin: PinDriver<'static, AnyOutputPin, Output>,
    lit: bool,
}

impl Led {
    pub fn new(pin: AnyOutputPin) -> anyhow::Result<Self> {
        let pin = PinDriver::output(pin)?;
        Ok(Self { pin, lit: false })
    }

    fn apply(&mut self) {
        // a failed level write leaves the indicator stale, nothing to act on
        let res = if self.lit {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.ok();
    }
}

impl Indicator for Led {
    fn toggle(&mut self) {
        self.lit = !self.lit;
        self.apply();
    }

    fn set(&mut self, on: bool) {
        self.lit = on;
        self.apply();
    }
}

/// Blocking delay on the FreeRTOS tick. The device does nothing else while
/// sleeping.
pub struct FreeRtosDelay;

impl Delay for FreeRtosDelay {
    fn sleep(&mut self, duration: Duration) {
        FreeRtos::delay_ms(duration.as_millis() as u32);
    }
}

// EOF
