//! Terminal host for the recruiting dashboard core.
mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod render;

pub use app::run_app;
