use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use egui::Vec2;
use log::warn;

use raceweek::data::{Catalogs, season_start};
use raceweek::errors::RaceweekError;
use raceweek::settings::controller::SettingsController;
use raceweek::settings::store::SettingsStore;
use raceweek::ui::PlannerApp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory for the settings file; defaults to the platform config dir
    #[arg(long)]
    settings_dir: Option<PathBuf>,

    /// Day to open the planner on (YYYY-MM-DD); defaults to the season start
    #[arg(long)]
    date: Option<String>,
}

fn run(args: Args) -> Result<(), RaceweekError> {
    let catalogs = Catalogs::load()?;

    let store = match args.settings_dir {
        Some(dir) => Some(SettingsStore::new(dir)),
        None => match SettingsStore::new_default() {
            Ok(store) => Some(store),
            Err(e) => {
                warn!("Settings will not be persisted: {}", e);
                None
            }
        },
    };
    let controller = SettingsController::new(&catalogs, store);

    let initial_date = match &args.date {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map_err(|_| RaceweekError::InvalidDateArg { value: raw.clone() })?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| RaceweekError::InvalidDateArg { value: raw.clone() })?
            .and_utc(),
        None => season_start(),
    };

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(1100., 720.));

    eframe::run_native(
        "Raceweek",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(PlannerApp::new(
                catalogs,
                controller,
                initial_date,
                cc,
            )))
        }),
    )
    .expect("could not start app");
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    run(args).expect("Error while running the planner");
}
