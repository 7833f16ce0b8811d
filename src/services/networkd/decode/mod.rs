//! Conversions from raw networkd byte buffers to typed values.

mod address;
mod client_id;
mod clock;

pub use address::{decode_address, decode_native_address};
pub use client_id::decode_client_id;
pub use clock::{BootClock, ClockReading, SystemBootClock};
