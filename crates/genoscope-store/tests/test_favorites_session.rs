//! Favorites across simulated sessions, against the file backend.
//!
//! Run with: cargo test --package genoscope-store --test test_favorites_session

use genoscope_datagen::generate;
use genoscope_store::{
    export_filename_for, FavoritesStore, FileStorage, StorageBackend, FAVORITES_KEY,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn corpus() -> Vec<genoscope_common::GeneRecord> {
    let mut rng = StdRng::seed_from_u64(5);
    generate(10, &["SubtypeA_vs_Control".to_string()], &mut rng)
}

#[test]
fn test_favorites_survive_a_session_restart() {
    let dir = tempfile::tempdir().unwrap();
    let genes = corpus();

    {
        let backend = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let mut store = FavoritesStore::load(backend).unwrap();
        store.add(&genes[0]).unwrap();
        store.add(&genes[3]).unwrap();
    }

    // Next session, same directory.
    let backend = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let store = FavoritesStore::load(backend).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.is_favorite(&genes[0].id));
    assert!(store.is_favorite(&genes[3].id));
    assert_eq!(store.favorites()[0], genes[0]);
}

#[test]
fn test_clear_after_favorite_leaves_storage_empty() {
    let dir = tempfile::tempdir().unwrap();
    let genes = corpus();

    let backend = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut store = FavoritesStore::load(backend).unwrap();
    store.add(&genes[0]).unwrap();
    store.clear().unwrap();

    assert!(!store.is_favorite(&genes[0].id));
    let blob = store.backend().read(FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(blob, "[]");
}

#[test]
fn test_corrupt_file_is_purged_on_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("favoriteGenes.json"), "#!garbage").unwrap();

    let backend = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let store = FavoritesStore::load(backend).unwrap();
    assert!(store.is_empty());
    assert!(!dir.path().join("favoriteGenes.json").exists());
}

#[test]
fn test_export_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let genes = corpus();

    let backend = FileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut store = FavoritesStore::load(backend).unwrap();
    store.add(&genes[1]).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&store.export_json().unwrap()).unwrap();
    let entries = doc.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = entries[0].as_object().unwrap();
    let mut fields: Vec<&str> = entry.keys().map(String::as_str).collect();
    fields.sort_unstable();
    assert_eq!(
        fields,
        vec![
            "clinicalStudies",
            "druggability",
            "fdaApproved",
            "name",
            "patents",
            "publications",
            "symbol"
        ]
    );

    let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    assert_eq!(export_filename_for(date), "gene-favorites-2025-08-30.json");
}
