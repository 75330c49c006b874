//! `/conferences` — the conference catalog. No filters.

use serde_json::Value;

use crate::client::CfbdClient;
use crate::error::Result;
use crate::table::DataTable;

pub fn get_conferences(client: &CfbdClient) -> Result<Value> {
    client.get_json("/conferences", &[])
}

pub fn get_conferences_table(client: &CfbdClient) -> Result<DataTable> {
    client.get_table("/conferences", &[])
}
