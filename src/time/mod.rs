//! Time handling: the real/simulated time source abstraction.

pub mod source;
