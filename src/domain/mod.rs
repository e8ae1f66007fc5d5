// Domain layer: presentation model and the encoder port.

pub mod model;
pub mod ports;
