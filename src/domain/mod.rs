// Domain layer - Core business models
pub mod chart;
pub mod device;
pub mod temperature;
