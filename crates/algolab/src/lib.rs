//! AlgoLab library: configuration, demo dispatch and error mapping.

pub mod app;
pub mod config;
pub mod demos;
pub mod errors;
pub mod version;
