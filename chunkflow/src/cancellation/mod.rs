//! Cooperative stop handling.

mod stop;

pub use stop::StopSignal;
