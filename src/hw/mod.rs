// hw/mod.rs
//
// Production collaborators. Everything in here talks to ESP-IDF and only
// compiles for the espidf target; the rest of the crate is host-portable.

mod onewire;
pub use onewire::*;

mod wifi;
pub use wifi::*;

mod http;
pub use http::*;

mod gpio;
pub use gpio::*;

// EOF
