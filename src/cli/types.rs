//! Type-safe wrappers for the filters CFBD endpoints accept.
//!
//! Each type validates on construction (and on `FromStr`, which is what
//! clap uses), so endpoint wrappers never see an out-of-range season or an
//! unknown season type.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{CfbdError, Result};

/// First season with college football data in the CFBD archive.
pub const MIN_SEASON: u16 = 1869;

fn current_year() -> u16 {
    chrono::Utc::now().year() as u16
}

/// A college football season year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(u16);

impl Season {
    /// Accepts years from [`MIN_SEASON`] through the current calendar year.
    pub fn new(year: u16) -> Result<Self> {
        if year < MIN_SEASON {
            return Err(CfbdError::invalid_param(format!(
                "`season` cannot be less than {MIN_SEASON}, got {year}"
            )));
        }
        let now = current_year();
        if year > now {
            return Err(CfbdError::invalid_param(format!(
                "`season` cannot be greater than {now}, got {year}"
            )));
        }
        Ok(Self(year))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        let year: u16 = s
            .parse()
            .map_err(|_| CfbdError::invalid_param(format!("`season` is not a year: `{s}`")))?;
        Self::new(year)
    }
}

/// A week within a season, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(u8);

impl Week {
    pub fn new(week: u8) -> Result<Self> {
        if week == 0 {
            return Err(CfbdError::invalid_param("`week` must be at least 1"));
        }
        Ok(Self(week))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        let week: u8 = s
            .parse()
            .map_err(|_| CfbdError::invalid_param(format!("`week` is not a number: `{s}`")))?;
        Self::new(week)
    }
}

/// Regular season or postseason. The wire form is lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Regular,
    Postseason,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Postseason => "postseason",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(SeasonType::Regular),
            "postseason" => Ok(SeasonType::Postseason),
            other => Err(CfbdError::invalid_param(format!(
                "`season_type` must be \"regular\" or \"postseason\", got `{other}`"
            ))),
        }
    }
}

/// NCAA division, the CFBD `classification` filter. Lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    #[default]
    Fbs,
    Fcs,
    Ii,
    Iii,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Fbs => "fbs",
            Division::Fcs => "fcs",
            Division::Ii => "ii",
            Division::Iii => "iii",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fbs" => Ok(Division::Fbs),
            "fcs" => Ok(Division::Fcs),
            "ii" => Ok(Division::Ii),
            "iii" => Ok(Division::Iii),
            other => Err(CfbdError::invalid_param(format!(
                "`classification` must be one of fbs, fcs, ii, iii, got `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_bounds() {
        assert!(Season::new(1868).is_err());
        assert!(Season::new(1869).is_ok());
        assert!(Season::new(2020).is_ok());
        assert!(Season::new(9999).is_err());
    }

    #[test]
    fn season_from_str() {
        assert_eq!("2022".parse::<Season>().unwrap().as_u16(), 2022);
        assert!("not-a-year".parse::<Season>().is_err());
        assert!("1700".parse::<Season>().is_err());
    }

    #[test]
    fn week_must_be_positive() {
        assert!(Week::new(0).is_err());
        assert_eq!(Week::new(14).unwrap().as_u8(), 14);
        assert!("0".parse::<Week>().is_err());
    }

    #[test]
    fn season_type_parsing() {
        assert_eq!("regular".parse::<SeasonType>().unwrap(), SeasonType::Regular);
        assert_eq!(
            "POSTSEASON".parse::<SeasonType>().unwrap(),
            SeasonType::Postseason
        );
        assert!("preseason".parse::<SeasonType>().is_err());
        assert_eq!(SeasonType::default().as_str(), "regular");
    }

    #[test]
    fn division_parsing() {
        assert_eq!("fbs".parse::<Division>().unwrap(), Division::Fbs);
        assert_eq!("III".parse::<Division>().unwrap(), Division::Iii);
        assert!("d1".parse::<Division>().is_err());
    }
}
