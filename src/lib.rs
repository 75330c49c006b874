//! CFBD API Client Library
//!
//! A Rust client for the CollegeFootballData.com API: bearer-token
//! resolution with a lightly obfuscated local fallback, validated filter
//! types, blocking HTTP, and JSON-to-table flattening.
//!
//! ## Features
//!
//! - **Token Resolution**: explicit argument → `CFBD_API_KEY` env var →
//!   local key file, failing loudly when no source yields a key
//! - **Local Key Store**: reversible (non-cryptographic) obfuscation of the
//!   key at `~/.cfbd/cfbd.json`
//! - **Validated Filters**: season, week, season type, and division types
//!   that reject bad input before any request is made
//! - **Tabular Flattening**: JSON arrays reshaped into column/row tables
//!   with dot-separated names for nested fields
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfbd_client::{ApiToken, CfbdClient, Season};
//! use cfbd_client::endpoints::{get_coaches_table, CoachesQuery};
//!
//! # fn example() -> cfbd_client::Result<()> {
//! let token = ApiToken::resolve(None)?;
//! let client = CfbdClient::new(token)?;
//!
//! let query = CoachesQuery {
//!     season: Some(Season::new(2022)?),
//!     team: Some("Cincinnati".to_string()),
//!     ..Default::default()
//! };
//! let table = get_coaches_table(&client, &query)?;
//! println!("{} coaching seasons", table.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your CFBD API key to avoid passing it to every call:
//! ```bash
//! export CFBD_API_KEY=your-key-here
//! ```

pub mod auth;
pub mod cli;
pub mod client;
pub mod commands;
pub mod endpoints;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use auth::{ApiToken, TokenStore, ENV_TOKEN_VAR, PLACEHOLDER_TOKEN};
pub use cli::types::{Division, Season, SeasonType, Week};
pub use client::{CfbdClient, BASE_URL};
pub use error::{CfbdError, Result};
pub use table::DataTable;
