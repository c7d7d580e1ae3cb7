// src/app/mod.rs
//
// Application wiring: configuration and the composition root

pub mod bootstrap;
pub mod config;

pub use bootstrap::{assemble_app_state, build_app_state, build_app_state_with_pool, init_logging};
pub use config::AppConfig;
