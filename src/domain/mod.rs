// Domain layer: boat records, locations and the ports the core talks through.

pub mod location;
pub mod model;
pub mod ports;
