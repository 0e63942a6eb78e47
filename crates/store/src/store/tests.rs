use uuid::Uuid;

use super::*;
use crate::validation_config::ValidationConfig;

fn sample(name: &str) -> ValidationConfig {
    ValidationConfig::new(name, Uuid::new_v4(), Uuid::new_v4())
}

#[test]
fn slugify_flattens_names() {
    assert_eq!(slugify("Checkout Daily"), "checkout-daily");
    assert_eq!(slugify("a//b"), "a-b");
    assert_eq!(slugify("--edge--"), "edge");
}

#[test]
fn memory_store_round_trip() {
    let store: InMemoryStore<ValidationConfig> = InMemoryStore::new();
    let record = sample("daily");
    let key = store.get_key("daily", None);

    assert!(!store.has_key(&key).unwrap());
    store.add(&key, &record).unwrap();
    assert!(store.has_key(&key).unwrap());
    assert_eq!(store.get(&key).unwrap(), record);

    store.remove_key(&key).unwrap();
    assert!(!store.has_key(&key).unwrap());
    assert!(matches!(
        store.get(&key),
        Err(StoreError::MissingKey { name }) if name == "daily"
    ));
}

#[test]
fn memory_store_remove_missing_key_errors() {
    let store: InMemoryStore<ValidationConfig> = InMemoryStore::new();
    let key = store.get_key("ghost", None);
    assert!(matches!(
        store.remove_key(&key),
        Err(StoreError::MissingKey { .. })
    ));
}

#[test]
fn file_store_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let store: FileStore<ValidationConfig> = FileStore::new(tmp.path()).unwrap();
    let record = sample("Checkout Daily");
    let key = store.get_key("Checkout Daily", record.id);

    store.add(&key, &record).unwrap();
    assert!(tmp.path().join("checkout-daily.json").exists());
    assert_eq!(store.get(&key).unwrap(), record);

    // A fresh store over the same directory sees the same records.
    let reopened: FileStore<ValidationConfig> = FileStore::new(tmp.path()).unwrap();
    assert!(reopened.has_key(&key).unwrap());

    store.remove_key(&key).unwrap();
    assert!(!store.has_key(&key).unwrap());
}

#[test]
fn file_store_get_missing_key_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let store: FileStore<ValidationConfig> = FileStore::new(tmp.path()).unwrap();
    let key = store.get_key("nope", None);
    assert!(matches!(
        store.get(&key),
        Err(StoreError::MissingKey { name }) if name == "nope"
    ));
}

#[test]
fn file_store_list_sorted_by_filename() {
    let tmp = tempfile::tempdir().unwrap();
    let store: FileStore<ValidationConfig> = FileStore::new(tmp.path()).unwrap();
    for name in ["bravo", "alpha"] {
        let record = sample(name);
        store.add(&store.get_key(name, None), &record).unwrap();
    }
    let names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["alpha", "bravo"]);
}
