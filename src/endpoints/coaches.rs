//! `/coaches` — head coach history.

use serde_json::Value;

use crate::cli::types::Season;
use crate::client::CfbdClient;
use crate::error::{CfbdError, Result};
use crate::table::DataTable;

/// Filters for [`get_coaches`]. A single `season` and a
/// `min_season`/`max_season` range are mutually exclusive.
#[derive(Debug, Default, Clone)]
pub struct CoachesQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub season: Option<Season>,
    pub min_season: Option<Season>,
    pub max_season: Option<Season>,
}

impl CoachesQuery {
    fn validate(&self) -> Result<()> {
        match (self.min_season, self.max_season) {
            (Some(min), Some(max)) => {
                if self.season.is_some() {
                    return Err(CfbdError::invalid_param(
                        "set either `season` or the `min_season`/`max_season` range, not both",
                    ));
                }
                if min > max {
                    return Err(CfbdError::invalid_param(
                        "`min_season` cannot be greater than `max_season`",
                    ));
                }
            }
            (None, None) => {
                let has_filter = self.season.is_some()
                    || self.first_name.is_some()
                    || self.last_name.is_some()
                    || self.team.is_some();
                if !has_filter {
                    return Err(CfbdError::invalid_param(
                        "specify at least one of `season`, a season range, a name, or a team",
                    ));
                }
            }
            _ => {
                return Err(CfbdError::invalid_param(
                    "`min_season` and `max_season` must be given together",
                ));
            }
        }
        Ok(())
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(first_name) = &self.first_name {
            query.push(("firstName", first_name.clone()));
        }
        if let Some(last_name) = &self.last_name {
            query.push(("lastName", last_name.clone()));
        }
        if let Some(team) = &self.team {
            query.push(("team", team.clone()));
        }
        if let Some(season) = self.season {
            query.push(("year", season.to_string()));
        }
        if let (Some(min), Some(max)) = (self.min_season, self.max_season) {
            query.push(("minYear", min.to_string()));
            query.push(("maxYear", max.to_string()));
        }
        query
    }
}

pub fn get_coaches(client: &CfbdClient, query: &CoachesQuery) -> Result<Value> {
    query.validate()?;
    client.get_json("/coaches", &query.to_query())
}

pub fn get_coaches_table(client: &CfbdClient, query: &CoachesQuery) -> Result<DataTable> {
    query.validate()?;
    client.get_table("/coaches", &query.to_query())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(year: u16) -> Season {
        Season::new(year).unwrap()
    }

    #[test]
    fn empty_query_is_rejected() {
        let err = CoachesQuery::default().validate().unwrap_err();
        assert!(matches!(err, CfbdError::InvalidParam { .. }));
    }

    #[test]
    fn season_and_range_is_ambiguous() {
        let query = CoachesQuery {
            season: Some(season(2020)),
            min_season: Some(season(2019)),
            max_season: Some(season(2022)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn half_a_range_is_rejected() {
        let query = CoachesQuery {
            min_season: Some(season(2019)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let query = CoachesQuery {
            min_season: Some(season(2022)),
            max_season: Some(season(2019)),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn query_pairs_use_cfbd_names() {
        let query = CoachesQuery {
            last_name: Some("Day".to_string()),
            season: Some(season(2020)),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
        assert_eq!(
            query.to_query(),
            vec![
                ("lastName", "Day".to_string()),
                ("year", "2020".to_string())
            ]
        );
    }

    #[test]
    fn range_query_pairs() {
        let query = CoachesQuery {
            min_season: Some(season(2019)),
            max_season: Some(season(2022)),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
        assert_eq!(
            query.to_query(),
            vec![
                ("minYear", "2019".to_string()),
                ("maxYear", "2022".to_string())
            ]
        );
    }
}
