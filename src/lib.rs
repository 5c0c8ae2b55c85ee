pub mod browser;
pub mod config;
pub mod output;
pub mod redirect;
pub mod tui;
