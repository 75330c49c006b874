//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use types::{Division, Season, SeasonType, Week};

#[derive(Debug, Parser)]
#[clap(name = "cfbd", about = "CollegeFootballData.com API client")]
pub struct Cfbd {
    /// CFBD API key (or set `CFBD_API_KEY`, or store one with `set-token`).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Directory holding the `.cfbd` key file, instead of the home directory.
    #[clap(long, global = true)]
    pub key_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Output switches shared by the fetch subcommands.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the raw JSON response instead of a tab-separated table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CoachArgs {
    /// Season year (e.g. 2022).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// Coach first name.
    #[clap(long)]
    pub first_name: Option<String>,

    /// Coach last name.
    #[clap(long)]
    pub last_name: Option<String>,

    /// Team name (e.g. "Cincinnati").
    #[clap(long, short)]
    pub team: Option<String>,

    /// Start of a season range (requires --max-season).
    #[clap(long)]
    pub min_season: Option<Season>,

    /// End of a season range (requires --min-season).
    #[clap(long)]
    pub max_season: Option<Season>,
}

#[derive(Debug, Args)]
pub struct DriveArgs {
    /// Season year (e.g. 2022).
    #[clap(long, short)]
    pub season: Season,

    /// "regular" or "postseason".
    #[clap(long, default_value_t = SeasonType::default())]
    pub season_type: SeasonType,

    /// Single week.
    #[clap(long, short)]
    pub week: Option<Week>,

    /// Either side of the ball.
    #[clap(long, short)]
    pub team: Option<String>,

    /// Offensive team only.
    #[clap(long)]
    pub offense: Option<String>,

    /// Defensive team only.
    #[clap(long)]
    pub defense: Option<String>,

    /// Either side's conference abbreviation (e.g. "B12").
    #[clap(long, short)]
    pub conference: Option<String>,

    /// Offensive conference only.
    #[clap(long)]
    pub offense_conference: Option<String>,

    /// Defensive conference only.
    #[clap(long)]
    pub defense_conference: Option<String>,

    /// NCAA division: fbs, fcs, ii, iii.
    #[clap(long)]
    pub classification: Option<Division>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Obfuscate an API key and store it in the local key file.
    SetToken {
        /// The raw CFBD API key (without any `Bearer ` prefix).
        token: String,
    },

    /// Head coach history.
    Coaches {
        #[clap(flatten)]
        query: CoachArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Conference catalog.
    Conferences {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Venue catalog.
    Venues {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Drive-level game data for a season.
    Drives {
        #[clap(flatten)]
        query: DriveArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },
}
