pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod server;

pub use error::{Error, Result};
