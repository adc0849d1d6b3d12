pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod providers;
pub mod request;
pub mod response;
pub mod utils;

pub use error::{Error, Result};
