// Domain layer: entities, errors, and ports for the application core.

pub mod entities;
pub mod errors;
pub mod ports;
