pub mod args;
pub mod bridge;
pub mod command;
pub mod config;
pub mod error;
pub mod resolve;
pub mod snapshot;
