use std::env;

use chrono::NaiveDate;
use config::Config;
use dotenvy::dotenv;

use lover_crm::domain::{city::City, lover::Lover};
use lover_crm::models::config::ServerConfig;
use lover_crm::repository::memory::InMemoryRepository;

/// Demo directory shown until a real ingestion pipeline feeds the store.
fn seed_repository() -> InMemoryRepository {
    let lover = |id: i32, name: &str, city: Option<&str>, mark: f32, day: u32| Lover {
        id,
        name: name.to_string(),
        city_code: city.map(str::to_string),
        mark,
        created_at: NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap_or_default()
            .into(),
    };

    InMemoryRepository::new(
        vec![
            lover(1, "Lan Anh", Some("HN"), 86.5, 1),
            lover(2, "Minh Châu", Some("HCM"), 91.0, 2),
            lover(3, "Hoàng Anh", Some("HN"), 67.25, 3),
            lover(4, "Thu Hà", Some("DN"), 74.0, 4),
            lover(5, "Quang Huy", Some("HCM"), 81.75, 5),
            lover(6, "Ngọc Mai", None, 58.0, 6),
        ],
        vec![
            City::new("HN", "Hà Nội"),
            City::new("HCM", "Hồ Chí Minh"),
            City::new("DN", "Đà Nẵng"),
        ],
    )
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    lover_crm::run(server_config, seed_repository()).await
}
