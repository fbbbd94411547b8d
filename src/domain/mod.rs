// Domain layer: credential models and the config-source port. No I/O here.

pub mod model;
pub mod ports;
