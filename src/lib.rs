// Library interface for raceweek
// This allows integration tests to access internal modules

pub mod data;
pub mod errors;
pub mod schedule;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use data::{AVAILABLE_COLUMNS, Car, Catalogs, ColumnId, Discipline, Licence, Race, Track};
pub use errors::RaceweekError;
pub use schedule::{visible_races, week_number};
pub use settings::controller::{SettingsController, SettingsUpdate};
pub use settings::store::SettingsStore;
pub use settings::{Filters, Modal, Mode, Settings, Snapshot, Sort, SortOrder};
pub use ui::PlannerApp;
