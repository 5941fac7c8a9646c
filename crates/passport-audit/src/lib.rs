pub mod config;
pub mod error;
pub mod passport;
pub mod telemetry;
