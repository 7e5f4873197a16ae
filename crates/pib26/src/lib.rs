//! PIB26 library: application logic for the `pib26` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
