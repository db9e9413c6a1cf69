pub mod blob;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod provider;
pub mod seed;

#[cfg(feature = "keyring-store")]
pub mod keyring;
