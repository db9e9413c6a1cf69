//! Configuration loading for SeedLock.

pub mod settings;

pub use settings::Settings;
