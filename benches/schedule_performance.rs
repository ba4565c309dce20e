use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use raceweek::data::{Catalogs, ColumnId, Discipline, Licence, Race};
use raceweek::schedule::visible_races;
use raceweek::settings::{Settings, Sort, SortOrder};
use std::time::Duration as StdDuration;

fn create_sample_races(count: usize) -> Vec<Race> {
    (0..count)
        .map(|i| Race {
            series_id: 500 + (i as u32 % 24),
            series: format!("Series {}", 500 + (i % 24)),
            discipline: if i % 3 == 0 {
                Discipline::Oval
            } else {
                Discipline::Road
            },
            licence: match i % 6 {
                0 => Licence::R,
                1 => Licence::D,
                2 => Licence::C,
                3 => Licence::B,
                4 => Licence::A,
                _ => Licence::P,
            },
            official: i % 4 != 0,
            fixed: i % 2 == 0,
            cars: vec![1001 + (i as u32 % 12)],
            track: 201 + (i as u32 % 12),
            track_name: format!("Track {}", 201 + (i % 12)),
            start_time: Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap()
                + Duration::minutes((i as i64 * 37) % 1440),
        })
        .collect()
}

fn bench_visible_races(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_operations");
    group.measurement_time(StdDuration::from_secs(5));

    let catalogs = Catalogs::load().unwrap();
    let day = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();

    let settings = Settings::defaults(&catalogs);
    let races = create_sample_races(500);
    group.bench_function("filter_and_sort_500", |b| {
        b.iter(|| visible_races(black_box(&races), black_box(&settings), black_box(day)))
    });

    let mut narrowed = Settings::defaults(&catalogs);
    narrowed.filters.owned_cars = true;
    narrowed.filters.owned_tracks = true;
    narrowed.sort = Sort {
        key: ColumnId::Series,
        order: SortOrder::Desc,
    };
    group.bench_function("filter_owned_only_500", |b| {
        b.iter(|| visible_races(black_box(&races), black_box(&narrowed), black_box(day)))
    });

    group.finish();
}

criterion_group!(benches, bench_visible_races);
criterion_main!(benches);
