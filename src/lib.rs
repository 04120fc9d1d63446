//! Client library and terminal console for a Magpie content-aggregation
//! server: article catalogue, auto-download rules, scheduled tasks, API
//! tokens and the OKLCH-defined console themes.

pub mod api;
pub mod cli;
pub mod render;
pub mod settings;
pub mod theme;
pub mod types;

pub use api::{ApiError, Client};
pub use settings::Settings;
