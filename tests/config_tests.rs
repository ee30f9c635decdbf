use staffclock::config::Config;
use staffclock::config::migrate::{migrate_config, missing_fields};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str) -> PathBuf {
    let mut p = env::temp_dir();
    p.push(format!("{}_cfgtest.conf", name));
    fs::remove_file(&p).ok();
    p
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = temp_conf("missing");
    let cfg = Config::load_from(&path).unwrap();
    assert!(cfg.enforce_distance);
    assert_eq!(cfg.site.radius_meters, 500.0);
    assert!(cfg.site().is_ok());
}

#[test]
fn test_save_and_reload() {
    let path = temp_conf("roundtrip");
    let mut cfg = Config::default();
    cfg.database = "/tmp/somewhere.sqlite".into();
    cfg.staff_id = "marco".into();
    cfg.enforce_distance = false;
    cfg.site.radius_meters = 150.0;
    cfg.save_to(&path).unwrap();

    let back = Config::load_from(&path).unwrap();
    assert_eq!(back.database, "/tmp/somewhere.sqlite");
    assert_eq!(back.staff_id, "marco");
    assert!(!back.policy().enforce_distance);
    assert_eq!(back.site().unwrap().allowed_radius_meters, 150.0);
}

#[test]
fn test_invalid_site_is_rejected() {
    let mut cfg = Config::default();
    cfg.site.radius_meters = 0.0;
    assert!(cfg.site().is_err());

    let mut cfg = Config::default();
    cfg.site.latitude = 123.0;
    assert!(cfg.site().is_err());
}

#[test]
fn test_check_and_migrate_fill_missing_keys() {
    let path = temp_conf("migrate");
    fs::write(&path, "database: /tmp/x.sqlite\nsite:\n  name: Old salon\n  latitude: 1.0\n  longitude: 2.0\n").unwrap();

    let missing = missing_fields(&path).unwrap();
    assert!(missing.contains(&"staff_id".to_string()));
    assert!(missing.contains(&"enforce_distance".to_string()));
    assert!(missing.contains(&"site.radius_meters".to_string()));
    assert!(!missing.contains(&"site.name".to_string()));

    let added = migrate_config(&path).unwrap();
    assert_eq!(added, missing);
    assert!(missing_fields(&path).unwrap().is_empty());

    // existing values survive
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.site.name, "Old salon");
    assert_eq!(cfg.site.latitude, 1.0);
    assert_eq!(cfg.database, "/tmp/x.sqlite");

    assert!(migrate_config(&path).unwrap().is_empty());
}
