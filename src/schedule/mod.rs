// The pure side of the planner: given the race catalog, the current
// settings and a selected day, produce the races to display plus the week
// context for the heading. No state, no I/O.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::data::{ColumnId, Race};
use crate::settings::{Settings, SortOrder};

const WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Season week shown next to the selected date. Counted from
/// `week_season_start` with a one second nudge past the boundary so that a
/// date landing exactly on a week boundary still reads as the completed
/// week rather than the next one.
pub fn week_number(week_season_start: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    let elapsed = date + Duration::seconds(1) - week_season_start;
    let seconds = elapsed.num_seconds();
    // `i64::div_ceil` is still unstable; this is its exact definition.
    seconds.div_euclid(WEEK_SECONDS) + (seconds.rem_euclid(WEEK_SECONDS) != 0) as i64
}

/// Races to display for `day`, filtered by the current settings and stably
/// sorted by the current sort column. Ties keep their catalog order.
pub fn visible_races(races: &[Race], settings: &Settings, day: DateTime<Utc>) -> Vec<Race> {
    let day_start = day.date_naive().and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::days(1);

    let mut visible: Vec<Race> = races
        .iter()
        .filter(|race| race_matches(race, settings, day_start, day_end))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = compare_by_column(a, b, settings.sort.key);
        match settings.sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    visible
}

fn race_matches(
    race: &Race,
    settings: &Settings,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> bool {
    let filters = &settings.filters;

    // the mode is a hard ceiling: a type filter cannot re-admit a
    // discipline the mode excludes
    settings.mode.allows(race.discipline)
        && filters.types.contains(&race.discipline)
        && filters.licence.contains(&race.licence)
        && filters.official.contains(&race.official)
        && filters.fixed.contains(&race.fixed)
        && (!filters.owned_cars || race.cars.iter().all(|sku| settings.owned_cars.contains(sku)))
        && (!filters.owned_tracks || settings.owned_tracks.contains(&race.track))
        && (!filters.favourite_series || settings.favourite_series.contains(&race.series_id))
        && (!filters.favourite_cars_only
            || race.cars.iter().any(|sku| settings.favourite_cars.contains(sku)))
        && (!filters.favourite_tracks_only || settings.favourite_tracks.contains(&race.track))
        && race.start_time >= day_start
        && race.start_time < day_end
}

fn compare_by_column(a: &Race, b: &Race, key: ColumnId) -> Ordering {
    match key {
        ColumnId::Licence => a.licence.cmp(&b.licence),
        ColumnId::Type => a.discipline.cmp(&b.discipline),
        ColumnId::Series => a.series.cmp(&b.series),
        ColumnId::Track => a.track_name.cmp(&b.track_name),
        ColumnId::Cars => a.cars.cmp(&b.cars),
        ColumnId::Start => a.start_time.cmp(&b.start_time),
        ColumnId::Official => a.official.cmp(&b.official),
        ColumnId::Fixed => a.fixed.cmp(&b.fixed),
    }
}
