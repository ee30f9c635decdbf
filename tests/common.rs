#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use staffclock::models::coordinate::Coordinate;
use staffclock::models::proximity::ProximityResult;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SITE_LAT: f64 = 25.276987;
pub const SITE_LNG: f64 = 55.296249;

pub fn staffclock() -> Command {
    cargo_bin_cmd!("staffclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file pointing at `db_path` with the default test site (500 m radius).
pub fn write_config(name: &str, db_path: &str, enforce_distance: bool) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffclock.conf", name));
    let yaml = format!(
        "database: {db_path}\nstaff_id: anna\nsite:\n  name: Test salon\n  latitude: {SITE_LAT}\n  longitude: {SITE_LNG}\n  radius_meters: 500.0\nenforce_distance: {enforce_distance}\n"
    );
    fs::write(&path, yaml).expect("write test config");
    path.to_string_lossy().to_string()
}

/// Fresh DB + config, initialized through the CLI. Returns (db, config).
pub fn init_env(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let conf = write_config(name, &db, true);

    staffclock()
        .args(["--db", &db, "--config", &conf, "--test", "init"])
        .assert()
        .success();

    (db, conf)
}

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn site() -> Coordinate {
    Coordinate::new(SITE_LAT, SITE_LNG).unwrap()
}

/// ~126 m east of the site.
pub fn near_site() -> Coordinate {
    Coordinate::new(25.276987, 55.297500).unwrap()
}

/// A few kilometres away.
pub fn far_from_site() -> Coordinate {
    Coordinate::new(25.30, 55.33).unwrap()
}

pub fn inside() -> ProximityResult {
    ProximityResult {
        distance_meters: 120.0,
        within_radius: true,
    }
}

pub fn outside() -> ProximityResult {
    ProximityResult {
        distance_meters: 3200.0,
        within_radius: false,
    }
}
