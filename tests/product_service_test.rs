use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use store_products::db;
use store_products::domain::{
    DomainError, Pageable, Product, ProductCategory, ProductPatch, Size,
};
use store_products::services::{DeleteOutcome, ProductService};

// Helper to create a test database and service over it
async fn setup() -> (ProductService, DatabaseConnection) {
    // In-memory SQLite for testing
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    (ProductService::new(db.clone()), db)
}

// Helper to create a test category
async fn create_test_category(db: &DatabaseConnection, name: &str) -> ProductCategory {
    let category = store_products::models::product_category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(Some(format!("{} department", name))),
        ..Default::default()
    };
    category
        .insert(db)
        .await
        .expect("Failed to create category")
        .into()
}

// Helper to create an order item referencing a product
async fn create_test_order_item(db: &DatabaseConnection, product_id: i64) -> i64 {
    let item = store_products::models::order_item::ActiveModel {
        quantity: Set(1),
        total_price: Set(10.0),
        status: Set("available".to_string()),
        product_id: Set(product_id),
        ..Default::default()
    };
    item.insert(db)
        .await
        .expect("Failed to create order item")
        .id
}

fn full_product(category: Option<ProductCategory>) -> Product {
    Product {
        id: None,
        name: "Denim Jacket".to_string(),
        description: Some("Stone washed".to_string()),
        price: 89.9,
        size: Size::XL,
        image: Some(vec![0x89, 0x50, 0x4e, 0x47]),
        image_content_type: Some("image/png".to_string()),
        annotation: "limited run".to_string(),
        is_active: true,
        product_category: category,
    }
}

async fn product_count(db: &DatabaseConnection) -> u64 {
    store_products::models::product::Entity::find()
        .count(db)
        .await
        .expect("count failed")
}

#[tokio::test]
async fn test_save_then_find_one_round_trips_every_field() {
    let (service, db) = setup().await;
    let category = create_test_category(&db, "Outerwear").await;

    let saved = service
        .save(full_product(Some(category)))
        .await
        .expect("save failed");
    let id = saved.id.expect("id assigned on insert");

    let found = service.find_one(id).await.unwrap().expect("product exists");

    assert_eq!(found, saved);
    assert_eq!(found, Product { id: Some(id), ..full_product(found.product_category.clone()) });
    assert_eq!(found.product_category.unwrap().name, "Outerwear");
}

#[tokio::test]
async fn test_update_overwrites_whole_record() {
    let (service, db) = setup().await;
    let saved = service.save(full_product(None)).await.unwrap();

    let replaced = service
        .update(Product {
            id: saved.id,
            ..Product::new("Plain Jacket", 50.0, Size::M, "")
        })
        .await
        .unwrap();

    assert_eq!(replaced.id, saved.id);
    assert_eq!(replaced.name, "Plain Jacket");
    assert_eq!(replaced.description, None);
    assert_eq!(replaced.image, None);
    assert!(!replaced.is_active);
    assert_eq!(product_count(&db).await, 1);
}

#[tokio::test]
async fn test_partial_update_price_only_leaves_other_fields() {
    let (service, db) = setup().await;
    let category = create_test_category(&db, "Outerwear").await;
    let before = service.save(full_product(Some(category))).await.unwrap();
    let id = before.id.unwrap();

    let after = service
        .partial_update(ProductPatch {
            price: Some(59.9),
            ..ProductPatch::new(id)
        })
        .await
        .unwrap()
        .expect("product exists");

    assert_eq!(after.price, 59.9);
    assert_eq!(Product { price: before.price, ..after.clone() }, before);

    let stored = service.find_one(id).await.unwrap().unwrap();
    assert_eq!(stored, after);
}

#[tokio::test]
async fn test_partial_update_accepts_explicit_empty_values() {
    let (service, _db) = setup().await;
    let before = service.save(full_product(None)).await.unwrap();

    let after = service
        .partial_update(ProductPatch {
            description: Some(String::new()),
            annotation: Some(String::new()),
            ..ProductPatch::new(before.id.unwrap())
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.description.as_deref(), Some(""));
    assert_eq!(after.annotation, "");
    assert_eq!(after.name, before.name);
}

#[tokio::test]
async fn test_failed_partial_update_rolls_back() {
    let (service, db) = setup().await;
    let category = create_test_category(&db, "Outerwear").await;
    let before = service.save(full_product(Some(category))).await.unwrap();
    let id = before.id.unwrap();

    // Breaks the price >= 0 CHECK on the final save
    let result = service
        .partial_update(ProductPatch {
            name: Some("Half written".to_string()),
            price: Some(-1.0),
            ..ProductPatch::new(id)
        })
        .await;

    assert!(matches!(result, Err(DomainError::Database(_))), "got {:?}", result);
    let stored = service.find_one(id).await.unwrap().expect("product kept");
    assert_eq!(stored, before);

    // The connection went back to the pool usable
    let after = service
        .partial_update(ProductPatch {
            price: Some(1.0),
            ..ProductPatch::new(id)
        })
        .await
        .expect("pool usable after rollback")
        .expect("product exists");
    assert_eq!(after.price, 1.0);
    assert_eq!(after.name, before.name);
    assert_eq!(product_count(&db).await, 1);
}

#[tokio::test]
async fn test_find_all_with_huge_page_number_returns_empty_page() {
    let (service, _db) = setup().await;
    service.save(full_product(None)).await.unwrap();

    let plain = service
        .find_all(Pageable::new(u64::MAX / 2, 4))
        .await
        .expect("page query failed");
    let eager = service
        .find_all_with_eager_relationships(Pageable::new(u64::MAX, 20))
        .await
        .expect("eager page query failed");

    assert!(plain.content.is_empty());
    assert_eq!(plain.total_elements, 1);
    assert!(plain.is_last());
    assert!(eager.content.is_empty());
    assert!(eager.is_last());
}

#[tokio::test]
async fn test_disable_product_changes_only_active_flag() {
    let (service, db) = setup().await;
    let category = create_test_category(&db, "Outerwear").await;
    let before = service.save(full_product(Some(category))).await.unwrap();
    let id = before.id.unwrap();

    let after = service
        .disable_product(ProductPatch {
            is_active: Some(false),
            price: Some(1.0),
            name: Some("ignored".to_string()),
            ..ProductPatch::new(id)
        })
        .await
        .unwrap()
        .expect("product exists");

    assert!(!after.is_active);
    assert_eq!(Product { is_active: true, ..after }, before);
}

#[tokio::test]
async fn test_missing_id_returns_none_without_creating_rows() {
    let (service, db) = setup().await;
    service.save(full_product(None)).await.unwrap();

    let patched = service
        .partial_update(ProductPatch {
            name: Some("Ghost".to_string()),
            ..ProductPatch::new(4242)
        })
        .await
        .expect("missing id is not an error");
    let disabled = service
        .disable_product(ProductPatch {
            is_active: Some(false),
            ..ProductPatch::new(4242)
        })
        .await
        .expect("missing id is not an error");

    assert!(patched.is_none());
    assert!(disabled.is_none());
    assert!(service.find_one(4242).await.unwrap().is_none());
    assert_eq!(product_count(&db).await, 1);
}

#[tokio::test]
async fn test_delete_without_order_items_removes_product() {
    let (service, db) = setup().await;
    let saved = service.save(full_product(None)).await.unwrap();
    let id = saved.id.unwrap();

    let outcome = service.delete(id).await.expect("delete failed");

    assert_eq!(outcome, DeleteOutcome::Removed);
    assert!(service.find_one(id).await.unwrap().is_none());
    assert_eq!(product_count(&db).await, 0);
}

#[tokio::test]
async fn test_delete_with_order_item_disables_product() {
    let (service, db) = setup().await;
    let saved = service.save(full_product(None)).await.unwrap();
    let id = saved.id.unwrap();
    create_test_order_item(&db, id).await;

    let outcome = service.delete(id).await.expect("delete failed");

    assert_eq!(outcome, DeleteOutcome::Disabled);
    let stored = service.find_one(id).await.unwrap().expect("product kept");
    assert!(!stored.is_active);
    assert_eq!(Product { is_active: true, ..stored }, saved);
    assert_eq!(product_count(&db).await, 1);
}

#[tokio::test]
async fn test_delete_checks_order_items_of_that_product_only() {
    let (service, db) = setup().await;
    let ordered = service.save(full_product(None)).await.unwrap();
    let spare = service.save(full_product(None)).await.unwrap();
    create_test_order_item(&db, ordered.id.unwrap()).await;

    service.delete(spare.id.unwrap()).await.unwrap();

    assert!(service.find_one(spare.id.unwrap()).await.unwrap().is_none());
    assert!(service.find_one(ordered.id.unwrap()).await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn test_delete_missing_id_is_silent() {
    let (service, db) = setup().await;

    let outcome = service.delete(77).await.expect("missing id is not an error");

    assert_eq!(outcome, DeleteOutcome::Removed);
    assert_eq!(product_count(&db).await, 0);
}

#[tokio::test]
async fn test_eager_page_total_matches_distinct_products() {
    let (service, db) = setup().await;
    let shirts = create_test_category(&db, "Shirts").await;
    for i in 0..7 {
        let category = (i % 3 != 0).then(|| shirts.clone());
        service
            .save(Product {
                name: format!("Shirt {}", i),
                ..full_product(category)
            })
            .await
            .unwrap();
    }

    let first = service
        .find_all_with_eager_relationships(Pageable::new(0, 3))
        .await
        .unwrap();
    let last = service
        .find_all_with_eager_relationships(Pageable::new(2, 3))
        .await
        .unwrap();

    assert_eq!(first.total_elements, 7);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.content.len(), 3);
    assert!(first.content[0].product_category.is_none());
    assert!(first.content[1].product_category.is_some());
    assert_eq!(last.content.len(), 1);
    assert!(last.is_last());
}

#[tokio::test]
async fn test_find_all_pages_without_categories() {
    let (service, db) = setup().await;
    let shirts = create_test_category(&db, "Shirts").await;
    service.save(full_product(Some(shirts))).await.unwrap();
    service.save(full_product(None)).await.unwrap();

    let page = service.find_all(Pageable::new(0, 10)).await.unwrap();

    assert_eq!(page.total_elements, 2);
    assert!(page.content.iter().all(|p| p.product_category.is_none()));

    let eager = service.find_all_eager().await.unwrap();
    assert_eq!(eager.len(), 2);
    assert!(eager[0].product_category.is_some());
}

#[tokio::test]
async fn test_find_all_by_active_after_soft_disable() {
    let (service, db) = setup().await;
    let kept = service.save(full_product(None)).await.unwrap();
    service.save(full_product(None)).await.unwrap();
    create_test_order_item(&db, kept.id.unwrap()).await;

    service.delete(kept.id.unwrap()).await.unwrap();

    let active = service.find_all_by_active(true).await.unwrap();
    let inactive = service.find_all_by_active(false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, kept.id);
}
