//! `/venues` — the stadium catalog. No filters.

use serde_json::Value;

use crate::client::CfbdClient;
use crate::error::Result;
use crate::table::DataTable;

pub fn get_venues(client: &CfbdClient) -> Result<Value> {
    client.get_json("/venues", &[])
}

pub fn get_venues_table(client: &CfbdClient) -> Result<DataTable> {
    client.get_table("/venues", &[])
}
