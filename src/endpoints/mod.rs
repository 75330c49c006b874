//! Thin wrappers over individual CFBD resources.
//!
//! Every wrapper has the same shape: validate the filters, build the query
//! pairs, GET through [`CfbdClient`](crate::client::CfbdClient), return the
//! raw JSON or its tabular flattening. Wrappers hold no state of their own.

pub mod coaches;
pub mod conferences;
pub mod drives;
pub mod venues;

pub use coaches::{get_coaches, get_coaches_table, CoachesQuery};
pub use conferences::{get_conferences, get_conferences_table};
pub use drives::{get_drives, get_drives_table, DrivesQuery};
pub use venues::{get_venues, get_venues_table};
