//! Command handlers
//!
//! Each handler receives the loaded configuration and the output formatter
//! and owns everything else it needs for the duration of the command.

mod book;
mod config;

pub use book::handle_book_command;
pub use config::handle_config_show;
