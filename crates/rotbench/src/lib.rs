//! rotbench library — application logic for the rotation benchmark.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
