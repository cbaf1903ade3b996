use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use crate::application::auth_service::AuthService;
use crate::application::talker_service::TalkerService;
use crate::domain::error::DomainError;
use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestTrace;

/// Registers shared state and every route. Used by the server and by tests.
pub fn configure(cfg: &mut web::ServiceConfig, talkers: TalkerService, auth: AuthService) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        warn!("rejected request body: {}", err);
        DomainError::Validation(err.to_string()).into()
    });

    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        warn!("rejected query string: {}", err);
        DomainError::Validation(err.to_string()).into()
    });

    cfg.app_data(json_config)
        .app_data(query_config)
        .app_data(web::Data::new(talkers))
        .app_data(web::Data::new(auth))
        .service(handlers::health::index)
        .service(handlers::health::health)
        .service(handlers::auth::login)
        .service(handlers::talker::list_talkers)
        .service(handlers::talker::search_talkers)
        .service(handlers::talker::get_talker)
        .service(handlers::talker::create_talker)
        .service(handlers::talker::update_talker)
        .service(handlers::talker::delete_talker);
}

pub async fn start_rest_server(
    config: AppConfig,
    talkers: TalkerService,
    auth: AuthService,
) -> anyhow::Result<()> {
    let bind_address = (config.host.clone(), config.port);

    info!(
        host = %bind_address.0,
        port = bind_address.1,
        data_file = %config.data_file.display(),
        "HTTP server starting"
    );

    HttpServer::new(move || {
        let talkers = talkers.clone();
        let auth = auth.clone();

        App::new()
            .wrap(RequestTrace)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(build_cors(&config))
            .configure(move |cfg| configure(cfg, talkers, auth))
    })
    .bind(bind_address)?
    .run()
    .await
    .map_err(anyhow::Error::new)?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }

    cors
}
