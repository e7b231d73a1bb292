pub mod cache;
pub mod client;
pub mod config;
pub mod downloader;
pub mod error;
pub mod judge;
pub mod types;

pub use error::{Error, Result};
