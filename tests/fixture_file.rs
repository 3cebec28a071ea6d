use msg_fixture::ids::{RandomIds, SeededIds};
use chrono::{TimeDelta, Utc};
use msg_fixture::{Generator, GeneratorConfig, TimeGrid, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
use std::time::Duration;

const NANOS_PER_MINUTE: i64 = 60 * 1_000_000_000;

struct Fixture {
    header: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

fn read_fixture(path: &Path) -> Fixture {
    let mut reader = csv::Reader::from_path(path).expect("open fixture");
    let header = reader.headers().expect("header").iter().map(str::to_string).collect();
    let rows = reader.records().collect::<Result<Vec<_>, _>>().expect("records");
    Fixture { header, rows }
}

fn config(c: u32, s: u32, p: u32, m: u32, days: u32, minutes: u32) -> GeneratorConfig {
    GeneratorConfig {
        channels: c,
        subtopics: s,
        publishers: p,
        metrics: m,
        window_days: days,
        interval_minutes: minutes,
    }
}

#[test]
fn single_row_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.csv");
    let mut rng = StdRng::seed_from_u64(1);
    let summary = generate(&config(1, 1, 1, 1, 1, 1440), &mut RandomIds, &mut rng, &path).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.path.as_deref(), Some(path.as_path()));

    let fixture = read_fixture(&path);
    assert_eq!(
        fixture.header,
        ["time", "channel", "subtopic", "publisher", "protocol", "name", "unit", "value"]
    );
    assert_eq!(fixture.rows.len(), 1);
    let row = &fixture.rows[0];
    assert_eq!(&row[2], "subtopic_1");
    assert_eq!(&row[4], "mqtt");
    assert_eq!(&row[5], "metric_1");
    assert_eq!(&row[6], "unit");
    assert!(uuid::Uuid::parse_str(&row[1]).is_ok());
    assert!(uuid::Uuid::parse_str(&row[3]).is_ok());
}

#[test]
fn sixteen_rows_over_four_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.csv");
    let mut rng = StdRng::seed_from_u64(2);
    // 1 day at 360 minutes = 4 timestamps
    generate(&config(2, 1, 1, 2, 1, 360), &mut RandomIds, &mut rng, &path).unwrap();

    let fixture = read_fixture(&path);
    assert_eq!(fixture.rows.len(), 16);
    let mut per_time: BTreeMap<i64, usize> = BTreeMap::new();
    for row in &fixture.rows {
        *per_time.entry(row[0].parse().unwrap()).or_default() += 1;
    }
    assert_eq!(per_time.len(), 4);
    assert!(per_time.values().all(|&n| n == 4));
    let times: Vec<i64> = per_time.keys().copied().collect();
    assert!(times.windows(2).all(|w| w[1] - w[0] == 360 * NANOS_PER_MINUTE));
}

#[test]
fn cardinalities_values_and_ordering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/messages.csv");
    let cfg = config(3, 2, 2, 3, 1, 90);
    let mut rng = StdRng::seed_from_u64(3);
    let summary = Generator::new(cfg)
        .progress_interval(Duration::ZERO)
        .run_to_path(&mut SeededIds::new(3), &mut rng, &path)
        .unwrap();
    assert_eq!(summary.timestamps, 16);

    let fixture = read_fixture(&path);
    assert_eq!(fixture.rows.len() as u64, cfg.row_count());

    let mut channels = HashSet::new();
    let mut publishers = HashSet::new();
    let mut last_time = i64::MIN;
    for row in &fixture.rows {
        let time: i64 = row[0].parse().unwrap();
        assert!(time >= last_time, "rows must be timestamp-major");
        last_time = time;
        channels.insert(row[1].to_string());
        publishers.insert(row[3].to_string());
        let value: f64 = row[7].parse().unwrap();
        assert!((0.0..100.0).contains(&value));
    }
    assert_eq!(channels.len(), 3);
    assert_eq!(publishers.len() as u64, cfg.publisher_count());

    // every timestamp group carries the whole catalog once
    let first_time = &fixture.rows[0][0];
    let group: HashSet<(&str, &str, &str, &str)> = fixture
        .rows
        .iter()
        .take_while(|r| &r[0] == first_time)
        .map(|r| (&r[1], &r[2], &r[3], &r[5]))
        .collect();
    assert_eq!(group.len() as u64, cfg.catalog_size());
}

#[test]
fn rerun_keeps_structure_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.csv");
    let cfg = config(2, 3, 1, 2, 1, 240);

    let labels = |f: &Fixture| -> BTreeSet<(String, String)> {
        f.rows.iter().map(|r| (r[2].to_string(), r[5].to_string())).collect()
    };

    generate(&cfg, &mut RandomIds, &mut StdRng::from_os_rng(), &path).unwrap();
    let first = read_fixture(&path);
    generate(&cfg, &mut RandomIds, &mut StdRng::from_os_rng(), &path).unwrap();
    let second = read_fixture(&path);

    assert_eq!(first.header, second.header);
    assert_eq!(first.rows.len(), second.rows.len());
    assert_eq!(labels(&first), labels(&second));
    assert_ne!(first.rows[0][1], second.rows[0][1]);
}

fn now_ns() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap()
}

#[test]
fn grid_ending_now_starts_one_window_back() {
    let window = TimeDelta::days(3).num_nanoseconds().unwrap();
    let before = now_ns();
    let grid = TimeGrid::ending_now(3, 15).unwrap();
    let after = now_ns();

    assert!(grid.start_ns() >= before - window && grid.start_ns() <= after - window);
    assert_eq!(grid.len(), 3 * 1440 / 15);
    assert!(grid.last().unwrap() < after);
}

#[test]
fn file_starts_one_window_before_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.csv");
    let window = TimeDelta::days(2).num_nanoseconds().unwrap();

    let before = now_ns();
    generate(&config(1, 1, 1, 2, 2, 60), &mut RandomIds, &mut StdRng::seed_from_u64(6), &path)
        .unwrap();
    let after = now_ns();

    let fixture = read_fixture(&path);
    let first: i64 = fixture.rows[0][0].parse().unwrap();
    let last: i64 = fixture.rows[fixture.rows.len() - 1][0].parse().unwrap();
    assert!(first >= before - window && first <= after - window);
    assert_eq!(last - first, 47 * 60 * NANOS_PER_MINUTE);
    assert!(last < after);
}
