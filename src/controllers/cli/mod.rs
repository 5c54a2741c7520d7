pub mod args;
pub mod cli_controller;
pub mod render_config;
