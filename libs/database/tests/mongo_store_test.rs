//! MongoDocumentStore against a real server.
//!
//! Run with: cargo test -p database --features mongodb -- --ignored
#![cfg(feature = "mongodb")]

use database::mongodb::{MongoConfig, MongoDocumentStore, check_health, connect_from_config};
use database::{Document, DocumentStore, StoreError};
use serde::{Deserialize, Serialize};
use test_utils::{TestDataBuilder, TestMongo};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Venue {
    id: String,
    name: String,
    capacity: u32,
}

impl Document for Venue {
    const COLLECTION: &'static str = "venue";

    fn id(&self) -> &str {
        &self.id
    }
}

fn venue(id: &str, name: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        capacity: 100,
    }
}

async fn store_for(mongo: &TestMongo, test_name: &str) -> MongoDocumentStore {
    let db = mongo.database(&TestDataBuilder::from_test_name(test_name).database_name());
    let store = MongoDocumentStore::new(db);
    store.initialize::<Venue>().await.unwrap();
    store
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_crud_lifecycle() {
    let mongo = TestMongo::new().await;
    let store = store_for(&mongo, "test_crud_lifecycle").await;

    assert!(store.get_all::<Venue>().await.unwrap().is_empty());

    store.create(&venue("v1", "Main hall")).await.unwrap();
    let found: Venue = store.get("v1").await.unwrap();
    assert_eq!(found, venue("v1", "Main hall"));

    let mut changed = found.clone();
    changed.name = "Annex".to_string();
    store.update("v1", &changed).await.unwrap();
    let found: Venue = store.get("v1").await.unwrap();
    assert_eq!(found.name, "Annex");
    assert_eq!(found.capacity, 100);

    store.delete::<Venue>("v1").await.unwrap();
    let err = store.get::<Venue>("v1").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_initialize_is_idempotent() {
    let mongo = TestMongo::new().await;
    let store = store_for(&mongo, "test_initialize_is_idempotent").await;

    store.initialize::<Venue>().await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_duplicate_id_is_write_error() {
    let mongo = TestMongo::new().await;
    let store = store_for(&mongo, "test_duplicate_id_is_write_error").await;

    store.create(&venue("dup", "A")).await.unwrap();
    let err = store.create(&venue("dup", "B")).await.unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_and_delete_missing_are_noops() {
    let mongo = TestMongo::new().await;
    let store = store_for(&mongo, "test_update_and_delete_missing_are_noops").await;

    store.update("ghost", &venue("ghost", "X")).await.unwrap();
    store.delete::<Venue>("ghost").await.unwrap();
    assert!(store.get_all::<Venue>().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_connect_from_config_and_health() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.host.clone(), mongo.port).with_pool_size(1, 2);

    let client = connect_from_config(&config).await.unwrap();
    assert!(check_health(&client).await);
}
