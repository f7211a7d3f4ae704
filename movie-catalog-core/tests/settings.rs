use std::fs;
use std::path::{Path, PathBuf};

use movie_catalog_core::settings::*;
use tempfile::TempDir;

#[test]
fn cli_override_wins() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    save_database_path_to(&settings, Some(Path::new("/data/films.db"))).unwrap();

    let resolved = resolve_database_path_with(Some(PathBuf::from("other.db")), &settings);
    assert_eq!(resolved, PathBuf::from("other.db"));
}

#[test]
fn saved_path_is_used_without_override() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("nested").join("settings.toml");
    save_database_path_to(&settings, Some(Path::new("/data/films.db"))).unwrap();

    assert_eq!(
        load_database_path(&settings),
        Some(PathBuf::from("/data/films.db"))
    );
    assert_eq!(
        resolve_database_path_with(None, &settings),
        PathBuf::from("/data/films.db")
    );
}

#[test]
fn falls_back_to_working_directory_file() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("missing.toml");
    assert_eq!(
        resolve_database_path_with(None, &settings),
        PathBuf::from(DEFAULT_DATABASE_FILE)
    );
}

#[test]
fn clearing_preserves_other_tables() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    fs::write(
        &settings,
        "[ui]\ntheme = \"dark\"\n\n[catalog]\ndatabase = \"/old.db\"\n",
    )
    .unwrap();

    save_database_path_to(&settings, None).unwrap();

    assert_eq!(load_database_path(&settings), None);
    let contents = fs::read_to_string(&settings).unwrap();
    assert!(contents.contains("theme = \"dark\""));
}

#[test]
fn empty_saved_path_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    fs::write(&settings, "[catalog]\ndatabase = \"\"\n").unwrap();
    assert_eq!(load_database_path(&settings), None);
}
