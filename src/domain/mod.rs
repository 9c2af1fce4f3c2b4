// Domain layer: data records returned by the guide and the ports it reads through.

pub mod model;
pub mod ports;
