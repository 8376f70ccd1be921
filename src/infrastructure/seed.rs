use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::models::{order_item, product, product_category};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create Categories
    let categories = vec![
        (1, "Shirts", Some("Tops and tees")),
        (2, "Outerwear", Some("Jackets and coats")),
        (3, "Accessories", None),
    ];

    for (id, name, description) in categories {
        let category = product_category::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
        };

        product_category::Entity::insert(category)
            .on_conflict(
                OnConflict::column(product_category::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    // 2. Create Products (id, name, price, size, category, active)
    let products = vec![
        (1, "Classic Tee", 19.99, "M", Some(1), true),
        (2, "Oxford Shirt", 49.0, "L", Some(1), true),
        (3, "Rain Jacket", 129.0, "XL", Some(2), true),
        (4, "Wool Scarf", 24.5, "S", Some(3), false),
        (5, "Gift Card", 25.0, "S", None, true),
    ];

    for (id, name, price, size, category_id, is_active) in products {
        let product = product::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            description: Set(None),
            price: Set(price),
            size: Set(size.to_owned()),
            image: Set(None),
            image_content_type: Set(None),
            annotation: Set(String::new()),
            is_active: Set(is_active),
            product_category_id: Set(category_id),
        };

        product::Entity::insert(product)
            .on_conflict(OnConflict::column(product::Column::Id).do_nothing().to_owned())
            .exec_without_returning(db)
            .await?;
    }

    // 3. One order line, so the Classic Tee can only ever be disabled
    let order_line = order_item::ActiveModel {
        id: Set(1),
        quantity: Set(2),
        total_price: Set(39.98),
        status: Set("available".to_owned()),
        product_id: Set(1),
    };

    order_item::Entity::insert(order_line)
        .on_conflict(OnConflict::column(order_item::Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    tracing::info!("Demo catalogue seeded");
    Ok(())
}
