//! Server construction and state wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};

use branch_backend::domain::BranchService;
use branch_backend::domain::ports::{BranchRepository, InMemoryBranchRepository};
use branch_backend::inbound::http::branches::{
    create_branch, get_branch, list_branches, update_phone_number,
};
use branch_backend::inbound::http::health::{HealthState, live, ready};
use branch_backend::inbound::http::holidays::{
    add_holiday, check_holiday, list_holidays, remove_holidays, verify_holiday,
};
use branch_backend::inbound::http::state::HttpState;
use branch_backend::outbound::persistence::{DbPool, DieselBranchRepository, PoolConfig};

/// Wrap a repository in the branch service and expose it through both
/// driving ports.
fn http_state_for<R>(repository: Arc<R>) -> HttpState
where
    R: BranchRepository + 'static,
{
    let service = Arc::new(BranchService::new(repository, Arc::new(DefaultClock)));
    HttpState::new(service.clone(), service)
}

/// Build handler state from configuration.
///
/// A configured `DATABASE_URL` selects the PostgreSQL document repository;
/// without one the server runs on the process-local in-memory store.
async fn build_http_state(config: &AppConfig) -> std::io::Result<HttpState> {
    match &config.database_url {
        Some(url) => {
            let pool_config = PoolConfig::new(url.clone()).with_max_size(config.pool_max_size);
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            info!("using PostgreSQL branch repository");
            Ok(http_state_for(Arc::new(DieselBranchRepository::new(pool))))
        }
        None => {
            warn!("no DATABASE_URL configured, branch data is process-local");
            Ok(http_state_for(Arc::new(InMemoryBranchRepository::new())))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(list_branches)
        .service(create_branch)
        .service(get_branch)
        .service(update_phone_number)
        .service(add_holiday)
        .service(remove_holidays)
        .service(list_holidays)
        .service(check_holiday)
        .service(verify_holiday);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server from the given configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the database pool cannot be built or
/// the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: AppConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config).await?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
