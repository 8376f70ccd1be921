use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
    /// Insert demo categories and products on startup
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://store.db?mode=rwc".to_string()
            } else {
                format!("sqlite://store_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            profile,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
