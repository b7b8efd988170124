//! saunalog_client - CLI client for the saunalog API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::SaunalogClient;
pub use error::{ClientError, Result};
