//! Session-gated marketplace pages: profile, buy, and sell.
//!
//! Each handler runs the auth guard first; anonymous or stale sessions are
//! redirected to the login form without touching the catalogue.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{AuthOutcome, authorize};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{pages, redirect};

/// Profile page at the site root.
#[get("/")]
pub async fn profile(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    match authorize(&session, state.users.as_ref()).await? {
        AuthOutcome::Authorized(user) => {
            let tickets = state.tickets.all().await;
            Ok(pages::profile_page(&user, &tickets))
        }
        AuthOutcome::Unauthorized => Ok(redirect::found("/login")),
    }
}

/// Buy page. Requires a known user like the profile page does.
#[get("/buy")]
pub async fn buy(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    match authorize(&session, state.users.as_ref()).await? {
        AuthOutcome::Authorized(user) => {
            let tickets = state.tickets.all().await;
            Ok(pages::buy_page(&user, &tickets))
        }
        AuthOutcome::Unauthorized => Ok(redirect::found("/login")),
    }
}

/// Sell page. Requires a known user like the profile page does.
#[get("/sell")]
pub async fn sell(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<HttpResponse> {
    match authorize(&session, state.users.as_ref()).await? {
        AuthOutcome::Authorized(user) => {
            let tickets = state.tickets.all().await;
            Ok(pages::sell_page(&user, &tickets))
        }
        AuthOutcome::Unauthorized => Ok(redirect::found("/login")),
    }
}

/// Catch-all for unknown routes: return to the home page.
pub async fn fallback() -> HttpResponse {
    redirect::found("/")
}
