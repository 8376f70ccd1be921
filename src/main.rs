use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_products::domain::Pageable;
use store_products::services::ProductService;
use store_products::{config, db, seed};

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG from it applies to the filter below
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_products=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();
    tracing::info!("Starting store-products (profile: {})", config.profile);

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_demo_data {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let service = ProductService::new(db);

    match service.find_all_with_eager_relationships(Pageable::default()).await {
        Ok(page) => {
            tracing::info!(
                "Catalogue holds {} products ({} pages)",
                page.total_elements,
                page.total_pages()
            );
            let lines = page.map(|product| {
                format!(
                    "#{:?} {} [{}] {:.2} active={} category={}",
                    product.id,
                    product.name,
                    product.size,
                    product.price,
                    product.is_active,
                    product
                        .product_category
                        .map(|c| c.name)
                        .unwrap_or_else(|| "-".to_string())
                )
            });
            for line in &lines.content {
                tracing::info!("  {}", line);
            }
        }
        Err(e) => tracing::error!("Failed to list products: {}", e),
    }

    match service.find_all_by_active(false).await {
        Ok(disabled) => tracing::info!("{} products are disabled for new orders", disabled.len()),
        Err(e) => tracing::error!("Failed to list disabled products: {}", e),
    }
}
