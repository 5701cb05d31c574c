use actix_cors::Cors;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::memory::InMemoryRepository;
use crate::routes::auth::{login, logout, show_login};
use crate::routes::lovers::{
    api_v1_lovers, filter_city, filter_clear, filter_search, filter_sort, show_lovers,
};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided
/// configuration and the seeded directory.
pub async fn run(server_config: ServerConfig, repo: InMemoryRepository) -> std::io::Result<()> {
    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(show_login)
            .service(login)
            .service(web::scope("/api").service(api_v1_lovers))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_lovers)
                    .service(filter_search)
                    .service(filter_city)
                    .service(filter_sort)
                    .service(filter_clear)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
