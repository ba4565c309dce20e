// Static reference catalogs: cars, tracks, display columns, and the season
// race schedule. Embedded in the binary and parsed once at startup.

use chrono::{DateTime, TimeZone, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::RaceweekError;

const CARS_JSON: &str = include_str!("cars.json");
const TRACKS_JSON: &str = include_str!("tracks.json");
const RACES_JSON: &str = include_str!("races.json");

/// Racing discipline of a car, track, or series.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Discipline {
    Road,
    Oval,
}

impl Discipline {
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Road => "Road",
            Discipline::Oval => "Oval",
        }
    }
}

/// Licence classes in ascending order, Rookie through Pro.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Licence {
    R,
    D,
    C,
    B,
    A,
    P,
}

impl Licence {
    pub fn letter(&self) -> &'static str {
        match self {
            Licence::R => "R",
            Licence::D => "D",
            Licence::C => "C",
            Licence::B => "B",
            Licence::A => "A",
            Licence::P => "P",
        }
    }
}

/// Identifiers for the race listing columns a user can show or hide.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Licence,
    Type,
    Series,
    Track,
    Cars,
    Start,
    Official,
    Fixed,
}

impl ColumnId {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnId::Licence => "Licence",
            ColumnId::Type => "Type",
            ColumnId::Series => "Series",
            ColumnId::Track => "Track",
            ColumnId::Cars => "Cars",
            ColumnId::Start => "Start",
            ColumnId::Official => "Official",
            ColumnId::Fixed => "Fixed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub sku: u32,
    pub name: String,
    pub free_with_subscription: bool,
    pub discipline: Discipline,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: u32,
    pub name: String,
    pub default: bool,
    pub primary_type: Discipline,
}

/// A single scheduled race session. Read-only: the planner filters and sorts
/// races but never mutates them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub series_id: u32,
    pub series: String,
    pub discipline: Discipline,
    pub licence: Licence,
    pub official: bool,
    pub fixed: bool,
    pub cars: Vec<u32>,
    pub track: u32,
    pub track_name: String,
    pub start_time: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub default: bool,
}

/// Every column the race listing can display, in presentation order.
pub const AVAILABLE_COLUMNS: &[ColumnDef] = &[
    ColumnDef { id: ColumnId::Licence, default: true },
    ColumnDef { id: ColumnId::Type, default: true },
    ColumnDef { id: ColumnId::Series, default: true },
    ColumnDef { id: ColumnId::Track, default: true },
    ColumnDef { id: ColumnId::Cars, default: true },
    ColumnDef { id: ColumnId::Start, default: true },
    ColumnDef { id: ColumnId::Official, default: false },
    ColumnDef { id: ColumnId::Fixed, default: false },
];

pub struct Catalogs {
    pub cars: Vec<Car>,
    pub tracks: Vec<Track>,
    pub races: Vec<Race>,
}

impl Catalogs {
    /// Parses the embedded catalogs. The only failure mode is a broken
    /// binary, so this is called once from `main` and surfaced there.
    pub fn load() -> Result<Self, RaceweekError> {
        Self::parse(CARS_JSON, TRACKS_JSON, RACES_JSON)
    }

    fn parse(cars: &str, tracks: &str, races: &str) -> Result<Self, RaceweekError> {
        // the upstream car catalog repeats entries across bundles
        let cars: Vec<Car> = serde_json::from_str::<Vec<Car>>(cars)
            .map_err(|e| RaceweekError::CatalogParseError {
                catalog: "cars.json",
                source: e,
            })?
            .into_iter()
            .unique_by(|car| car.sku)
            .collect();
        let tracks = serde_json::from_str(tracks).map_err(|e| RaceweekError::CatalogParseError {
            catalog: "tracks.json",
            source: e,
        })?;
        let races = serde_json::from_str(races).map_err(|e| RaceweekError::CatalogParseError {
            catalog: "races.json",
            source: e,
        })?;
        Ok(Self {
            cars,
            tracks,
            races,
        })
    }

    pub fn car_name(&self, sku: u32) -> Option<&str> {
        self.cars
            .iter()
            .find(|car| car.sku == sku)
            .map(|car| car.name.as_str())
    }
}

/// First day of the season, start of race week 1.
pub fn season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap()
}

/// Exclusive end of the season, 12 weeks after the start.
pub fn season_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap()
}

/// Anchor for week numbering in the heading. Kept separate from
/// `season_start` because some seasons number weeks from a pre-season
/// practice week.
pub fn week_season_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap()
}
