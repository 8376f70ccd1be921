use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::debug!("Database ready at {}", database_url);
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS product_category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL CHECK (price >= 0),
            size TEXT NOT NULL CHECK (size IN ('S', 'M', 'L', 'XL', 'XXL')),
            image BLOB,
            image_content_type TEXT,
            annotation TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT 0,
            product_category_id INTEGER REFERENCES product_category(id) ON DELETE SET NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Order items pin their product: a hard delete is refused while any reference it
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS order_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            total_price REAL NOT NULL CHECK (total_price >= 0),
            status TEXT NOT NULL,
            product_id INTEGER NOT NULL REFERENCES product(id) ON DELETE RESTRICT
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_order_item_product_id ON order_item(product_id)"
            .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_product_is_active ON product(is_active)".to_owned(),
    ))
    .await?;

    Ok(())
}
