pub mod clap_app;
pub mod command;
pub mod config;
pub mod output;
pub mod seed;
