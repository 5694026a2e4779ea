pub mod api;
pub mod entities;
pub mod export;
pub mod metrics;
pub mod risk;
pub mod sample;
pub mod session;
pub mod telemetry;
