// Domain layer: constraint model, descriptor tables and ports. No dependency on the core engine.

pub mod descriptor;
pub mod model;
pub mod ports;
