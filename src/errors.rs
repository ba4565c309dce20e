// Error types for raceweek

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum RaceweekError {
    // Errors for the embedded reference catalogs
    #[snafu(display("Error parsing embedded catalog {catalog}"))]
    CatalogParseError {
        catalog: &'static str,
        source: serde_json::Error,
    },

    // Settings persistence errors
    #[snafu(display("Could not find application config directory to save settings file"))]
    NoConfigDir,
    #[snafu(display("Error writing settings file"))]
    SettingsIOError { source: io::Error },
    #[snafu(display("Error serializing settings file"))]
    SettingsSerializeError { source: serde_json::Error },

    // Shell errors
    #[snafu(display("Invalid date argument: {value} (expected YYYY-MM-DD)"))]
    InvalidDateArg { value: String },
}
