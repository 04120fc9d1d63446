pub mod articles;
pub mod client;
pub mod download_log;
pub mod rules;
pub mod server_config;
pub mod tasks;
pub mod tokens;
pub mod users;

pub use client::{ApiError, Client};
pub use tokens::generate_key;
