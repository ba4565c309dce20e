// User settings: the central mutable value of the planner. Built from
// defaults derived off the catalogs, overridden by a persisted snapshot,
// and mutated only through the controller.

pub mod controller;
pub mod store;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::{AVAILABLE_COLUMNS, Catalogs, ColumnId, Discipline, Licence};

/// Global discipline restriction. A hard ceiling over the type filter:
/// a discipline excluded by the mode can never be shown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Road,
    Oval,
    Both,
}

impl Mode {
    pub fn allows(&self, discipline: Discipline) -> bool {
        match self {
            Mode::Both => true,
            Mode::Road => discipline == Discipline::Road,
            Mode::Oval => discipline == Discipline::Oval,
        }
    }
}

/// The dialogs the planner can show. At most one is open at a time.
/// Transient UI state, never part of the persisted snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    MyTracks,
    MyCars,
    FavouriteSeries,
    Options,
    About,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub key: ColumnId,
    pub order: SortOrder,
}

/// Filter criteria for the race listing. The categorical fields hold the
/// admitted values; a full enumeration means "show all".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(rename = "type")]
    pub types: Vec<Discipline>,
    pub licence: Vec<Licence>,
    pub official: Vec<bool>,
    pub fixed: Vec<bool>,
    pub owned_cars: bool,
    pub owned_tracks: bool,
    pub favourite_series: bool,
    pub favourite_tracks_only: bool,
    pub favourite_cars_only: bool,
}

impl Filters {
    /// The unfiltered state: every categorical value admitted, every
    /// ownership/favourite toggle off.
    pub fn defaults() -> Self {
        Self {
            types: vec![Discipline::Road, Discipline::Oval],
            licence: vec![
                Licence::R,
                Licence::D,
                Licence::C,
                Licence::B,
                Licence::A,
                Licence::P,
            ],
            official: vec![false, true],
            fixed: vec![false, true],
            owned_cars: false,
            owned_tracks: false,
            favourite_series: false,
            favourite_tracks_only: false,
            favourite_cars_only: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub filters: Filters,
    pub owned_cars: BTreeSet<u32>,
    pub owned_tracks: BTreeSet<u32>,
    pub favourite_series: BTreeSet<u32>,
    pub favourite_cars: BTreeSet<u32>,
    pub favourite_tracks: BTreeSet<u32>,
    pub sort: Sort,
    pub columns: Vec<ColumnId>,
    pub mode: Mode,
    pub current_modal: Option<Modal>,
}

impl Settings {
    /// Deterministic initial settings derived from the catalogs: content
    /// that comes with a subscription counts as owned, default-flagged
    /// columns are visible, and nothing is filtered out.
    pub fn defaults(catalogs: &Catalogs) -> Self {
        Self {
            filters: Filters::defaults(),
            owned_cars: catalogs
                .cars
                .iter()
                .filter(|car| car.free_with_subscription)
                .map(|car| car.sku)
                .collect(),
            owned_tracks: catalogs
                .tracks
                .iter()
                .filter(|track| track.default)
                .map(|track| track.id)
                .collect(),
            favourite_series: BTreeSet::new(),
            favourite_cars: BTreeSet::new(),
            favourite_tracks: BTreeSet::new(),
            sort: Sort {
                key: ColumnId::Licence,
                order: SortOrder::Asc,
            },
            columns: AVAILABLE_COLUMNS
                .iter()
                .filter(|column| column.default)
                .map(|column| column.id)
                .collect(),
            mode: Mode::Both,
            current_modal: None,
        }
    }
}

/// Wire format of the persisted settings file. Every field is optional so
/// that a snapshot written by an older build still loads; absent top-level
/// fields keep their in-memory defaults. The merge is deliberately shallow:
/// a stored `filters` object replaces the whole filters record, partial
/// nested shapes never fall back per-key.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub filters: Option<Filters>,
    pub owned_cars: Option<BTreeSet<u32>>,
    pub owned_tracks: Option<BTreeSet<u32>>,
    pub favourite_series: Option<BTreeSet<u32>>,
    pub favourite_tracks: Option<BTreeSet<u32>>,
    pub favourite_cars: Option<BTreeSet<u32>>,
    pub columns: Option<Vec<ColumnId>>,
    pub sort: Option<Sort>,
    pub mode: Option<Mode>,
}

impl Snapshot {
    /// The persistable subset of the settings, i.e. everything except
    /// `current_modal`.
    pub fn of(settings: &Settings) -> Self {
        Self {
            filters: Some(settings.filters.clone()),
            owned_cars: Some(settings.owned_cars.clone()),
            owned_tracks: Some(settings.owned_tracks.clone()),
            favourite_series: Some(settings.favourite_series.clone()),
            favourite_tracks: Some(settings.favourite_tracks.clone()),
            favourite_cars: Some(settings.favourite_cars.clone()),
            columns: Some(settings.columns.clone()),
            sort: Some(settings.sort),
            mode: Some(settings.mode),
        }
    }

    /// Shallow merge over `settings`: present fields replace, absent fields
    /// leave the current value untouched.
    pub fn apply_to(self, settings: &mut Settings) {
        let Snapshot {
            filters,
            owned_cars,
            owned_tracks,
            favourite_series,
            favourite_tracks,
            favourite_cars,
            columns,
            sort,
            mode,
        } = self;
        if let Some(filters) = filters {
            settings.filters = filters;
        }
        if let Some(owned_cars) = owned_cars {
            settings.owned_cars = owned_cars;
        }
        if let Some(owned_tracks) = owned_tracks {
            settings.owned_tracks = owned_tracks;
        }
        if let Some(favourite_series) = favourite_series {
            settings.favourite_series = favourite_series;
        }
        if let Some(favourite_tracks) = favourite_tracks {
            settings.favourite_tracks = favourite_tracks;
        }
        if let Some(favourite_cars) = favourite_cars {
            settings.favourite_cars = favourite_cars;
        }
        if let Some(columns) = columns {
            settings.columns = columns;
        }
        if let Some(sort) = sort {
            settings.sort = sort;
        }
        if let Some(mode) = mode {
            settings.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_catalogs() {
        let catalogs = Catalogs::load().unwrap();
        let settings = Settings::defaults(&catalogs);

        for car in &catalogs.cars {
            assert_eq!(
                settings.owned_cars.contains(&car.sku),
                car.free_with_subscription,
                "{}",
                car.name
            );
        }
        for track in &catalogs.tracks {
            assert_eq!(
                settings.owned_tracks.contains(&track.id),
                track.default,
                "{}",
                track.name
            );
        }
        assert!(settings.favourite_series.is_empty());
        assert!(settings.favourite_cars.is_empty());
        assert!(settings.favourite_tracks.is_empty());
        assert_eq!(settings.sort.key, ColumnId::Licence);
        assert_eq!(settings.sort.order, SortOrder::Asc);
        assert_eq!(settings.mode, Mode::Both);
        assert_eq!(settings.current_modal, None);
    }

    #[test]
    fn test_default_columns_are_a_subset_of_available() {
        let catalogs = Catalogs::load().unwrap();
        let settings = Settings::defaults(&catalogs);
        for column in &settings.columns {
            assert!(AVAILABLE_COLUMNS.iter().any(|c| c.id == *column));
        }
    }

    #[test]
    fn test_snapshot_merge_is_shallow() {
        let catalogs = Catalogs::load().unwrap();
        let defaults = Settings::defaults(&catalogs);
        let mut settings = defaults.clone();

        // only `sort` present: everything else must stay at its default
        let snapshot = Snapshot {
            sort: Some(Sort {
                key: ColumnId::Series,
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        snapshot.apply_to(&mut settings);

        assert_eq!(settings.sort.key, ColumnId::Series);
        assert_eq!(settings.sort.order, SortOrder::Desc);
        assert_eq!(settings.filters, defaults.filters);
        assert_eq!(settings.owned_cars, defaults.owned_cars);
        assert_eq!(settings.columns, defaults.columns);
        assert_eq!(settings.mode, defaults.mode);
    }

    #[test]
    fn test_stored_filters_replace_wholesale() {
        let catalogs = Catalogs::load().unwrap();
        let mut settings = Settings::defaults(&catalogs);

        let mut stored = Filters::defaults();
        stored.licence = vec![Licence::A, Licence::P];
        stored.owned_cars = true;
        let snapshot = Snapshot {
            filters: Some(stored.clone()),
            ..Default::default()
        };
        snapshot.apply_to(&mut settings);

        assert_eq!(settings.filters, stored);
    }

    #[test]
    fn test_snapshot_wire_format_is_camel_case() {
        let catalogs = Catalogs::load().unwrap();
        let settings = Settings::defaults(&catalogs);
        let json = serde_json::to_value(Snapshot::of(&settings)).unwrap();

        let object = json.as_object().unwrap();
        for key in [
            "filters",
            "ownedCars",
            "ownedTracks",
            "favouriteSeries",
            "favouriteTracks",
            "favouriteCars",
            "columns",
            "sort",
            "mode",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert!(!object.contains_key("currentModal"));
        let filters = object["filters"].as_object().unwrap();
        assert!(filters.contains_key("type"));
        assert!(filters.contains_key("favouriteTracksOnly"));
    }

    #[test]
    fn test_unknown_snapshot_fields_are_tolerated() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{ "mode": "oval", "futureField": 42 }"#).unwrap();
        assert_eq!(snapshot.mode, Some(Mode::Oval));
        assert_eq!(snapshot.filters, None);
    }
}
