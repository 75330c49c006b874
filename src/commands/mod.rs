//! Command handlers for the `cfbd` binary.
//!
//! Handlers own the process-facing output (stdout); the library underneath
//! only reports through `tracing` and error values.

use std::path::Path;

use serde_json::Value;

use crate::auth::TokenStore;
use crate::cli::{CoachArgs, DriveArgs, OutputArgs};
use crate::client::CfbdClient;
use crate::endpoints::{
    coaches::{get_coaches, CoachesQuery},
    conferences::get_conferences,
    drives::{get_drives, DrivesQuery},
    venues::get_venues,
};
use crate::error::Result;
use crate::table::DataTable;

pub fn handle_set_token(token: &str, key_dir: Option<&Path>) -> Result<()> {
    let store = match key_dir {
        Some(dir) => TokenStore::in_dir(dir),
        None => TokenStore::default_location()?,
    };
    store.save(token)?;
    println!("Stored CFBD API key in {}", store.path().display());
    Ok(())
}

pub fn handle_coaches(client: &CfbdClient, args: CoachArgs, output: OutputArgs) -> Result<()> {
    let query = CoachesQuery {
        first_name: args.first_name,
        last_name: args.last_name,
        team: args.team,
        season: args.season,
        min_season: args.min_season,
        max_season: args.max_season,
    };
    print_response(&get_coaches(client, &query)?, &output)
}

pub fn handle_conferences(client: &CfbdClient, output: OutputArgs) -> Result<()> {
    print_response(&get_conferences(client)?, &output)
}

pub fn handle_venues(client: &CfbdClient, output: OutputArgs) -> Result<()> {
    print_response(&get_venues(client)?, &output)
}

pub fn handle_drives(client: &CfbdClient, args: DriveArgs, output: OutputArgs) -> Result<()> {
    let query = DrivesQuery {
        season: args.season,
        season_type: args.season_type,
        week: args.week,
        team: args.team,
        offense: args.offense,
        defense: args.defense,
        conference: args.conference,
        offense_conference: args.offense_conference,
        defense_conference: args.defense_conference,
        classification: args.classification,
    };
    print_response(&get_drives(client, &query)?, &output)
}

fn print_response(value: &Value, output: &OutputArgs) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", DataTable::from_json(value)?.to_tsv());
    }
    Ok(())
}
