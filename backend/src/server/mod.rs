//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::RequestId;
use backend::inbound::http::accounts::{login, login_form, logout, register, register_form};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tickets::{buy, fallback, profile, sell};

#[derive(Clone)]
struct AppDependencies {
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        state,
        health_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    // Probes are registered outside the session scope so they stay
    // cookie-free; everything else shares the session middleware, and the
    // scope's default service handles the catch-all redirect.
    App::new()
        .app_data(state)
        .app_data(health_state)
        .wrap(RequestId)
        .service(ready)
        .service(live)
        .service(
            web::scope("")
                .wrap(session)
                .service(register_form)
                .service(register)
                .service(login_form)
                .service(login)
                .service(logout)
                .service(profile)
                .service(buy)
                .service(sell)
                .default_service(web::to(fallback)),
        )
}

/// Construct an Actix HTTP server for the marketplace pages.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] with session and binding settings.
/// - `state`: port implementations shared by the handlers.
/// - `health_state`: shared readiness state updated once the server is
///   initialised.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    config: ServerConfig,
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            state: state.clone(),
            health_state: server_health_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
