// Domain layer: client records and the ports the report core depends on.

pub mod model;
pub mod ports;
