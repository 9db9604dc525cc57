// Domain layer: the web project model and the API port.

pub mod model;
pub mod ports;
