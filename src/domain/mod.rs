// Domain layer: duration model, policies and the sleeper port.

pub mod model;
pub mod ports;
