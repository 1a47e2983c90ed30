use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lernio_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers::{health_handler, quiz_handler},
    middleware::RequestIdMiddleware,
};

const JWT_EXPIRATION_HOURS: i64 = 24;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, JWT_EXPIRATION_HOURS);
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .service(health_handler::health_check)
            .service(health_handler::health_check_ready)
            .service(health_handler::health_check_live)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(quiz_handler::get_quiz)
                    .service(quiz_handler::submit_quiz)
                    .service(quiz_handler::list_attempts)
                    .service(quiz_handler::get_hint),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
