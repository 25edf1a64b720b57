pub mod error;
pub mod lights;
pub mod state;

mod client;
pub use client::*;
