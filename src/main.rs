use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use clinic_console::api::HttpClinicApi;
use clinic_console::config::ConsoleConfig;
use clinic_console::handlers::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ConsoleConfig::from_env();

    // Session encryption key: SESSION_KEY keeps flash cookies valid across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (flash messages lost on restart)");
            Key::generate()
        }
    };

    let api = HttpClinicApi::new(&config.backend_url);
    let state = web::Data::new(AppState::new(api, &config));

    log::info!(
        "Starting console at http://{} (backend {}, ordering {:?})",
        config.bind,
        config.backend_url,
        config.ordering
    );

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure::<HttpClinicApi>)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(include_str!("../templates/errors/404.html"))
            }))
    })
    .bind(&config.bind)?
    .run()
    .await
}
