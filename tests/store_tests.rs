use chrono::NaiveDateTime;
use mushtrace::config::Settings;
use mushtrace::core::backup::{BackupLogic, backup_dir, snapshot_path};
use mushtrace::core::{LoadOutcome, RecordStore};
use mushtrace::errors::AppError;
use serde_json::json;
use std::fs;

mod common;
use common::temp_dir;

const L1: &str =
    "Blue Oyster - 2024-05-01-BOX001 - Restaurant A - Packed: 2024-05-01 - Shipped: 2024-05-02";
const L2: &str =
    "Lion's Mane - 2024-05-03-BOX002 - Restaurant B - Packed: 2024-05-03 - Shipped: 2024-05-04";

#[test]
fn missing_log_file_is_created_empty() {
    let dir = temp_dir("store_missing");
    let path = dir.join("nested").join("logs.json");

    let (store, outcome) = RecordStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Created));
    assert!(store.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
}

#[test]
fn mutations_are_persisted_immediately() {
    let dir = temp_dir("store_persist");
    let path = dir.join("logs.json");

    let (mut store, _) = RecordStore::open(&path);
    store.append(L1.into()).unwrap();
    store.append(L2.into()).unwrap();

    let (reloaded, outcome) = RecordStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Loaded(2)));
    assert_eq!(reloaded.labels(), &[L1.to_string(), L2.to_string()]);
    assert_eq!(reloaded.last(), Some(L2));

    assert_eq!(store.remove_at(0).unwrap(), L1);
    let (reloaded, _) = RecordStore::open(&path);
    assert_eq!(reloaded.labels(), &[L2.to_string()]);
}

#[test]
fn remove_out_of_range_changes_nothing() {
    let dir = temp_dir("store_remove_range");
    let path = dir.join("logs.json");

    let (mut store, _) = RecordStore::open(&path);
    store.append(L1.into()).unwrap();

    assert!(matches!(store.remove_at(3), Err(AppError::InvalidIndex(3))));
    assert_eq!(store.len(), 1);
}

#[test]
fn non_list_file_resets_the_store() {
    let dir = temp_dir("store_not_list");
    let path = dir.join("logs.json");
    fs::write(&path, r#"{"a":1}"#).unwrap();

    let (store, outcome) = RecordStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Reset(AppError::Format(_))));
    assert!(store.is_empty());
}

#[test]
fn non_string_entries_reset_the_store() {
    let dir = temp_dir("store_not_strings");
    let path = dir.join("logs.json");
    fs::write(&path, json!([L1, 5]).to_string()).unwrap();

    let (store, outcome) = RecordStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Reset(AppError::Format(_))));
    assert!(store.is_empty());
}

#[test]
fn invalid_json_resets_the_store() {
    let dir = temp_dir("store_bad_json");
    let path = dir.join("logs.json");
    fs::write(&path, "[\"unterminated").unwrap();

    let (_, outcome) = RecordStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Reset(AppError::Json(_))));
}

#[test]
fn backup_clear_restore_round_trip() {
    let dir = temp_dir("store_round_trip");
    let path = dir.join("logs.json");
    let backups = dir.join("backups");

    let (mut store, _) = RecordStore::open(&path);
    store.append(L1.into()).unwrap();
    store.append(L2.into()).unwrap();

    let snapshot = store.backup(&backups).unwrap();
    assert!(snapshot.starts_with(&backups));
    let name = snapshot.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("logs_backup_") && name.ends_with(".json"));

    assert_eq!(store.clear().unwrap(), 2);
    assert!(store.is_empty());

    assert_eq!(store.restore(&snapshot).unwrap(), 2);
    assert_eq!(store.labels(), &[L1.to_string(), L2.to_string()]);

    let (reloaded, _) = RecordStore::open(&path);
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn bad_restore_empties_memory_but_keeps_the_file() {
    let dir = temp_dir("store_bad_restore");
    let path = dir.join("logs.json");
    let bogus = dir.join("bogus.json");
    fs::write(&bogus, r#"{"not":"a list"}"#).unwrap();

    let (mut store, _) = RecordStore::open(&path);
    store.append(L1.into()).unwrap();

    assert!(matches!(store.restore(&bogus), Err(AppError::Format(_))));
    assert!(store.is_empty());

    let (reloaded, _) = RecordStore::open(&path);
    assert_eq!(reloaded.labels(), &[L1.to_string()]);
}

#[test]
fn snapshot_names_do_not_collide() {
    let dir = temp_dir("store_collision");
    let now = NaiveDateTime::parse_from_str("2024-05-01 10:20:30", "%Y-%m-%d %H:%M:%S").unwrap();

    let first = snapshot_path(&dir, now);
    assert_eq!(
        first.file_name().unwrap().to_string_lossy(),
        "logs_backup_2024-05-01_102030.json"
    );
    fs::write(&first, "[]").unwrap();

    let second = snapshot_path(&dir, now);
    assert_eq!(
        second.file_name().unwrap().to_string_lossy(),
        "logs_backup_2024-05-01_102030_1.json"
    );
}

#[test]
fn backups_are_listed_newest_first_and_deletable() {
    let dir = temp_dir("store_list_backups");
    fs::write(dir.join("logs_backup_2024-01-01_000000.json"), "[]").unwrap();
    fs::write(dir.join("logs_backup_2024-03-01_000000.json"), "[]").unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let names: Vec<String> = BackupLogic::list(&dir)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "logs_backup_2024-03-01_000000.json",
            "logs_backup_2024-01-01_000000.json"
        ]
    );

    BackupLogic::delete(&dir, "logs_backup_2024-01-01_000000.json").unwrap();
    assert_eq!(BackupLogic::list(&dir).unwrap().len(), 1);
    assert!(BackupLogic::delete(&dir, "missing.json").is_err());
}

#[test]
fn compressed_backup_replaces_the_plain_copy() {
    let dir = temp_dir("store_compress");
    let (mut store, _) = RecordStore::open(dir.join("logs.json"));
    store.append(L1.into()).unwrap();

    let plain = store.backup(&dir.join("backups")).unwrap();
    let zipped = BackupLogic::compress(&plain).unwrap();

    assert_eq!(zipped.extension().unwrap(), "zip");
    assert!(zipped.exists());
    assert!(!plain.exists());
}

#[test]
fn backup_dir_defaults_to_current_folder() {
    assert_eq!(backup_dir(""), std::path::Path::new(".").join("backups"));
    assert_eq!(
        backup_dir("/srv/exports"),
        std::path::Path::new("/srv/exports").join("backups")
    );
}

#[test]
fn missing_settings_file_gives_defaults() {
    let dir = temp_dir("settings_missing");
    let (settings, problem) = Settings::load(&dir.join("settings.json"));

    assert!(problem.is_none());
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.theme, "darkly");
    assert_eq!(settings.default_restaurant_id, 1);
    assert_eq!(settings.default_export_format, "csv");
}

#[test]
fn partial_settings_are_merged_and_unknown_keys_survive() {
    let dir = temp_dir("settings_partial");
    let path = dir.join("settings.json");
    fs::write(
        &path,
        json!({ "theme": "flatly", "window_geometry": "800x600" }).to_string(),
    )
    .unwrap();

    let (mut settings, problem) = Settings::load(&path);
    assert!(problem.is_none());
    assert_eq!(settings.theme, "flatly");
    assert_eq!(settings.default_export_format, "csv");

    settings.set("default_restaurant_id", "2").unwrap();
    settings.save(&path).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["window_geometry"], "800x600");
    assert_eq!(saved["default_restaurant_id"], 2);
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    let dir = temp_dir("settings_broken");
    let path = dir.join("settings.json");
    fs::write(&path, "[1, 2]").unwrap();

    let (settings, problem) = Settings::load(&path);
    assert!(matches!(problem, Some(AppError::Format(_))));
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_setters_validate_values() {
    let mut settings = Settings::default();

    settings.set("default_export_format", "XLSX").unwrap();
    assert_eq!(settings.default_export_format, "excel");

    assert!(settings.set("default_export_format", "docx").is_err());
    assert!(settings.set("default_restaurant_id", "abc").is_err());
    assert!(settings.set("colour", "red").is_err());

    assert_eq!(settings.toggle_theme(), "flatly");
    assert_eq!(settings.toggle_theme(), "darkly");
}

/// Turns the log's parent directory into a plain file so every save fails.
fn break_log_dir(dir: &std::path::Path) {
    fs::remove_dir_all(dir).unwrap();
    fs::write(dir, "not a directory").unwrap();
}

#[test]
fn failed_saves_leave_memory_untouched() {
    let dir = temp_dir("store_rollback");
    let log_dir = dir.join("log");
    let snapshot = dir.join("snapshot.json");
    fs::write(&snapshot, json!([L2]).to_string()).unwrap();

    let (mut store, _) = RecordStore::open(log_dir.join("logs.json"));
    store.append(L1.into()).unwrap();
    store.append(L2.into()).unwrap();
    let before = store.labels().to_vec();

    break_log_dir(&log_dir);

    assert!(store.append("Blue Oyster - extra".into()).is_err());
    assert_eq!(store.labels(), before.as_slice());

    assert!(store.remove_at(0).is_err());
    assert_eq!(store.labels(), before.as_slice());

    assert!(store.clear().is_err());
    assert_eq!(store.labels(), before.as_slice());

    assert!(store.restore(&snapshot).is_err());
    assert_eq!(store.labels(), before.as_slice());
}

#[test]
fn compressed_backups_are_listed_and_restorable() {
    let dir = temp_dir("store_zip_restore");
    let backups = dir.join("backups");
    let (mut store, _) = RecordStore::open(dir.join("logs.json"));
    store.append(L1.into()).unwrap();
    store.append(L2.into()).unwrap();

    let zipped = BackupLogic::compress(&store.backup(&backups).unwrap()).unwrap();
    assert_eq!(BackupLogic::list(&backups).unwrap(), vec![zipped.clone()]);

    store.clear().unwrap();
    assert_eq!(store.restore(&zipped).unwrap(), 2);
    assert_eq!(store.labels(), &[L1.to_string(), L2.to_string()]);
}

#[test]
fn broken_archive_is_rejected_without_touching_the_file() {
    let dir = temp_dir("store_bad_zip");
    let path = dir.join("logs.json");
    let bogus = dir.join("logs_backup_bogus.zip");
    fs::write(&bogus, "definitely not a zip").unwrap();

    let (mut store, _) = RecordStore::open(&path);
    store.append(L1.into()).unwrap();

    assert!(store.restore(&bogus).is_err());
    let (reloaded, _) = RecordStore::open(&path);
    assert_eq!(reloaded.labels(), &[L1.to_string()]);
}

#[test]
fn mistyped_settings_key_keeps_the_others() {
    let dir = temp_dir("settings_mistyped");
    let path = dir.join("settings.json");
    fs::write(
        &path,
        json!({
            "export_folder": "/srv/out",
            "default_export_format": "excel",
            "default_restaurant_id": "2",
            "window_geometry": "800x600"
        })
        .to_string(),
    )
    .unwrap();

    let (settings, problem) = Settings::load(&path);
    assert_eq!(settings.export_folder, "/srv/out");
    assert_eq!(settings.default_export_format, "excel");
    assert_eq!(settings.default_restaurant_id, 1);
    assert_eq!(settings.extra["window_geometry"], "800x600");

    match problem {
        Some(AppError::Format(msg)) => assert!(msg.contains("default_restaurant_id"), "{msg}"),
        other => panic!("expected a format error, got {other:?}"),
    }
}

#[test]
fn restaurant_id_must_be_a_number() {
    let mut settings = Settings::default();

    settings.set("default_restaurant_id", "0").unwrap();
    assert_eq!(settings.default_restaurant_id, 0);

    let err = settings.set("default_restaurant_id", "-1").unwrap_err();
    assert!(err.to_string().contains("non-negative integer"), "{err}");
}
