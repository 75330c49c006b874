//! `/drives` — drive-level game data. Season is mandatory.

use serde_json::Value;

use crate::cli::types::{Division, Season, SeasonType, Week};
use crate::client::CfbdClient;
use crate::error::Result;
use crate::table::DataTable;

#[derive(Debug, Clone)]
pub struct DrivesQuery {
    pub season: Season,
    pub season_type: SeasonType,
    pub week: Option<Week>,
    pub team: Option<String>,
    pub offense: Option<String>,
    pub defense: Option<String>,
    pub conference: Option<String>,
    pub offense_conference: Option<String>,
    pub defense_conference: Option<String>,
    pub classification: Option<Division>,
}

impl DrivesQuery {
    /// Regular-season drives for one season, no other filters.
    pub fn for_season(season: Season) -> Self {
        Self {
            season,
            season_type: SeasonType::default(),
            week: None,
            team: None,
            offense: None,
            defense: None,
            conference: None,
            offense_conference: None,
            defense_conference: None,
            classification: None,
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("seasonType", self.season_type.to_string()),
            ("year", self.season.to_string()),
        ];
        if let Some(week) = self.week {
            query.push(("week", week.to_string()));
        }
        if let Some(team) = &self.team {
            query.push(("team", team.clone()));
        }
        if let Some(offense) = &self.offense {
            query.push(("offense", offense.clone()));
        }
        if let Some(defense) = &self.defense {
            query.push(("defense", defense.clone()));
        }
        if let Some(conference) = &self.conference {
            query.push(("conference", conference.clone()));
        }
        if let Some(offense_conference) = &self.offense_conference {
            query.push(("offenseConference", offense_conference.clone()));
        }
        if let Some(defense_conference) = &self.defense_conference {
            query.push(("defenseConference", defense_conference.clone()));
        }
        if let Some(classification) = self.classification {
            query.push(("classification", classification.to_string()));
        }
        query
    }
}

pub fn get_drives(client: &CfbdClient, query: &DrivesQuery) -> Result<Value> {
    client.get_json("/drives", &query.to_query())
}

pub fn get_drives_table(client: &CfbdClient, query: &DrivesQuery) -> Result<DataTable> {
    client.get_table("/drives", &query.to_query())
}
