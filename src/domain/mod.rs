// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde where needed.

pub mod model;
pub mod ports;
