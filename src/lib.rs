// Declare all modules as public so they can be used by downstream crates and tests.
pub mod app;
pub mod config;
pub mod core;
