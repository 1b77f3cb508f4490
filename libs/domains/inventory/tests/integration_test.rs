//! Repository integration tests against a real MongoDB
//!
//! These use testcontainers, so they need a working Docker daemon.
//! Run them explicitly with `cargo test -- --ignored`.

use domain_inventory::{
    InventoryError, MongoProductRepository, ProductFields, ProductRepository,
};
use test_utils::{assertions::assert_uuid_eq, TestDataBuilder, TestMongo};
use uuid::Uuid;

fn fields(name: &str, price: f64, quantity: i64) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        price,
        description: Some("integration".to_string()),
        quantity,
        unit: Some("pcs".to_string()),
    }
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_insert_and_find_round_trip() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    repo.init_indexes().await.unwrap();

    let builder = TestDataBuilder::from_test_name("insert_round_trip");
    let name = builder.name("product", "main");

    let created = repo.insert(fields(&name, 4.5, 12)).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_uuid_eq(found.id, created.id, "find_by_id");
    assert_eq!(found.name, name);
    assert_eq!(found.price, 4.5);
    assert_eq!(found.quantity, 12);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_unique_index_rejects_duplicate_names() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    repo.init_indexes().await.unwrap();

    let builder = TestDataBuilder::from_test_name("unique_index");
    let name = builder.name("product", "dup");

    repo.insert(fields(&name, 1.0, 1)).await.unwrap();
    let err = repo.insert(fields(&name, 2.0, 2)).await.unwrap_err();

    assert!(matches!(err, InventoryError::Conflict(n) if n == name));

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_update_missing_id_is_not_found() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());

    let id = Uuid::now_v7();
    let err = repo.update(id, fields("ghost", 1.0, 1)).await.unwrap_err();

    assert!(matches!(err, InventoryError::NotFound(e) if e == id));
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_delete_missing_id_is_not_found() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());

    let id = Uuid::now_v7();
    let err = repo.delete(id).await.unwrap_err();

    assert!(matches!(err, InventoryError::NotFound(e) if e == id));
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_update_replaces_fields_in_place() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());

    let builder = TestDataBuilder::from_test_name("update_in_place");
    let created = repo
        .insert(fields(&builder.name("product", "before"), 1.0, 1))
        .await
        .unwrap();

    let renamed = builder.name("product", "after");
    let updated = repo.update(created.id, fields(&renamed, 9.5, 4)).await.unwrap();

    assert_uuid_eq(updated.id, created.id, "update keeps id");
    assert_eq!(updated.name, renamed);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.price, 9.5);
    assert_eq!(found.quantity, 4);
}

#[tokio::test]
#[ignore] // Requires Docker for the MongoDB container
async fn test_totals_aggregation_computes_value_server_side() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());

    let builder = TestDataBuilder::from_test_name("totals_aggregation");
    let name = builder.name("product", "totals");

    repo.insert(fields(&name, 5.0, 3)).await.unwrap();

    let rows = repo.totals().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, name);
    assert_eq!(rows[0].quantity, 3);
    assert_eq!(rows[0].total_value, 15.0);
}
