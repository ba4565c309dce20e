// The single owner of the in-memory settings value. Every mutation builds
// the new value and immediately writes the persistable snapshot; views only
// ever read through `settings()` and mutate through these operations.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use log::warn;

use crate::data::{Catalogs, ColumnId};
use crate::settings::store::SettingsStore;
use crate::settings::{Filters, Modal, Mode, Settings, Snapshot, Sort};

/// One settable field per variant. Replaces the dynamic key/value setter of
/// the original planner UI with a closed union so every write still goes
/// through the one persistence path, but with checked types.
#[derive(Clone, Debug)]
pub enum SettingsUpdate {
    OwnedCars(BTreeSet<u32>),
    OwnedTracks(BTreeSet<u32>),
    FavouriteSeries(BTreeSet<u32>),
    FavouriteCars(BTreeSet<u32>),
    FavouriteTracks(BTreeSet<u32>),
    Columns(Vec<ColumnId>),
    Sort(Sort),
    Mode(Mode),
}

pub struct SettingsController {
    settings: Settings,
    defaults: Settings,
    store: Option<SettingsStore>,
}

impl SettingsController {
    /// Builds defaults from the catalogs and shallow-merges the stored
    /// snapshot on top, when there is one. `store` is `None` when no config
    /// directory exists; the controller then runs in-memory only.
    pub fn new(catalogs: &Catalogs, store: Option<SettingsStore>) -> Self {
        let defaults = Settings::defaults(catalogs);
        let mut settings = defaults.clone();
        if let Some(store) = &store
            && let Some(snapshot) = store.load()
        {
            snapshot.apply_to(&mut settings);
        }
        Self {
            settings,
            defaults,
            store,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The defaults template, for "restore defaults" affordances in the
    /// dialogs. Read-only: callers copy what they need.
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    /// Final best-effort snapshot write, called when the app shuts down.
    pub fn flush(&self) {
        self.persist();
    }

    /// Replaces the filters wholesale. The filters panel is trusted to hand
    /// back a valid shape; nothing is validated here.
    pub fn update_filters(&mut self, new_filters: Filters) {
        self.settings.filters = new_filters;
        self.persist();
    }

    /// Restores the filters to their defaults, leaving owned content,
    /// favourites, columns, sort and mode untouched.
    pub fn reset_filters(&mut self) {
        self.settings.filters = self.defaults.filters.clone();
        self.persist();
    }

    /// Restores every setting to its default. The open modal survives, this
    /// is the "reset all" button inside one of the dialogs.
    pub fn reset_settings(&mut self) {
        let current_modal = self.settings.current_modal;
        self.settings = self.defaults.clone();
        self.settings.current_modal = current_modal;
        self.persist();
    }

    /// Opens a dialog. Opening over an already open dialog replaces it, so
    /// at most one is ever shown.
    pub fn open_modal(&mut self, modal: Modal) {
        self.settings.current_modal = Some(modal);
        self.persist();
    }

    pub fn close_modal(&mut self) {
        self.settings.current_modal = None;
        self.persist();
    }

    /// The single write path for all per-field setters.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::OwnedCars(skus) => self.settings.owned_cars = skus,
            SettingsUpdate::OwnedTracks(ids) => self.settings.owned_tracks = ids,
            SettingsUpdate::FavouriteSeries(ids) => self.settings.favourite_series = ids,
            SettingsUpdate::FavouriteCars(skus) => self.settings.favourite_cars = skus,
            SettingsUpdate::FavouriteTracks(ids) => self.settings.favourite_tracks = ids,
            SettingsUpdate::Columns(columns) => self.settings.columns = columns,
            SettingsUpdate::Sort(sort) => self.settings.sort = sort,
            SettingsUpdate::Mode(mode) => self.settings.mode = mode,
        }
        self.persist();
    }

    /// Translates raw slider input (epoch seconds) into the start of its
    /// UTC day. The app shell owns the selected date and stores the result;
    /// this controller only normalizes it.
    pub fn update_date(&self, epoch_seconds: i64) -> Option<DateTime<Utc>> {
        let date = Utc.timestamp_opt(epoch_seconds, 0).single()?;
        Some(date.date_naive().and_time(NaiveTime::MIN).and_utc())
    }

    /// Snapshot write after every mutation. Persistence is best-effort:
    /// failures are logged and the in-memory state stays authoritative.
    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&Snapshot::of(&self.settings)) {
            warn!("Error while saving settings file: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Licence;
    use crate::settings::SortOrder;

    fn in_memory_controller() -> SettingsController {
        let catalogs = Catalogs::load().unwrap();
        SettingsController::new(&catalogs, None)
    }

    #[test]
    fn test_fresh_controller_matches_defaults() {
        let catalogs = Catalogs::load().unwrap();
        let controller = SettingsController::new(&catalogs, None);
        assert_eq!(*controller.settings(), Settings::defaults(&catalogs));
        assert_eq!(controller.settings().current_modal, None);
    }

    #[test]
    fn test_reset_filters_leaves_other_fields() {
        let mut controller = in_memory_controller();

        let mut narrowed = Filters::defaults();
        narrowed.licence = vec![Licence::A];
        controller.update_filters(narrowed);
        controller.apply(SettingsUpdate::FavouriteCars(BTreeSet::from([1012])));
        controller.apply(SettingsUpdate::OwnedTracks(BTreeSet::from([208, 209])));

        controller.reset_filters();

        assert_eq!(controller.settings().filters, Filters::defaults());
        assert_eq!(controller.settings().favourite_cars, BTreeSet::from([1012]));
        assert_eq!(
            controller.settings().owned_tracks,
            BTreeSet::from([208, 209])
        );
    }

    #[test]
    fn test_reset_settings_restores_defaults_deeply() {
        let catalogs = Catalogs::load().unwrap();
        let defaults = Settings::defaults(&catalogs);
        let mut controller = SettingsController::new(&catalogs, None);

        controller.apply(SettingsUpdate::Mode(Mode::Oval));
        controller.apply(SettingsUpdate::Sort(Sort {
            key: ColumnId::Start,
            order: SortOrder::Desc,
        }));
        controller.reset_settings();
        assert_eq!(*controller.settings(), defaults);

        // the restored value shares no state with the defaults template:
        // mutating it must not bleed into a later reset
        controller.apply(SettingsUpdate::FavouriteSeries(BTreeSet::from([501])));
        controller.reset_settings();
        assert_eq!(*controller.settings(), defaults);
    }

    #[test]
    fn test_modal_transitions() {
        let mut controller = in_memory_controller();
        assert_eq!(controller.settings().current_modal, None);

        controller.open_modal(Modal::Options);
        assert_eq!(controller.settings().current_modal, Some(Modal::Options));

        // opening over an open modal replaces it
        controller.open_modal(Modal::MyCars);
        assert_eq!(controller.settings().current_modal, Some(Modal::MyCars));

        controller.close_modal();
        assert_eq!(controller.settings().current_modal, None);
    }

    #[test]
    fn test_update_date_normalizes_to_start_of_utc_day() {
        let controller = in_memory_controller();
        // 2024-01-09T16:45:30Z
        let normalized = controller.update_date(1704818730).unwrap();
        assert_eq!(normalized, Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_every_mutation_persists_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = Catalogs::load().unwrap();
        let store = SettingsStore::new(dir.path().to_path_buf());
        let mut controller = SettingsController::new(&catalogs, Some(store));

        controller.apply(SettingsUpdate::Mode(Mode::Road));

        let reread = SettingsStore::new(dir.path().to_path_buf());
        assert_eq!(reread.load().unwrap().mode, Some(Mode::Road));
    }

    #[test]
    fn test_stored_snapshot_overrides_defaults_on_construction() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = Catalogs::load().unwrap();

        let store = SettingsStore::new(dir.path().to_path_buf());
        let snapshot = Snapshot {
            sort: Some(Sort {
                key: ColumnId::Track,
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        store.save(&snapshot).unwrap();

        let controller = SettingsController::new(&catalogs, Some(store));
        let defaults = Settings::defaults(&catalogs);
        assert_eq!(controller.settings().sort.key, ColumnId::Track);
        assert_eq!(controller.settings().filters, defaults.filters);
        assert_eq!(controller.settings().owned_cars, defaults.owned_cars);
    }
}
