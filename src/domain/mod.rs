// Domain layer: models and ports. No HTTP or CLI types in here.

pub mod model;
pub mod ports;
