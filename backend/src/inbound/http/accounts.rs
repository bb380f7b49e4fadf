//! Account handlers: registration, login, and logout.
//!
//! Handlers stay thin: parse the form, run the domain validator, call the
//! user store, and pick a page or redirect. Every validation branch ends in
//! a form re-render carrying the first violated rule's message.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserStoreError;
use crate::domain::{LoginAttempt, RegistrationError, RegistrationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{pages, redirect};

/// Registration form body for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password2: String,
}

impl From<RegisterForm> for RegistrationRequest {
    fn from(form: RegisterForm) -> Self {
        Self {
            email: form.email,
            name: form.name,
            password: form.password,
            password2: form.password2,
        }
    }
}

/// Login form body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginForm> for LoginAttempt {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
        }
    }
}

/// Render the registration form.
#[get("/register")]
pub async fn register_form() -> HttpResponse {
    pages::register_page("Register")
}

/// Validate a registration and create the account.
///
/// Pure rules run first, in priority order; only then is the store
/// consulted, so a form full of mistakes reports exactly one message.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let request = RegistrationRequest::from(form.into_inner());
    let new_user = match request.validate() {
        Ok(new_user) => new_user,
        Err(error) => return Ok(pages::register_page(&error.to_string())),
    };

    if state.users.get(new_user.email()).await.is_some() {
        return Ok(pages::register_page(
            &RegistrationError::EmailTaken.to_string(),
        ));
    }
    match state
        .users
        .register(new_user.email(), new_user.name(), new_user.password())
        .await
    {
        Ok(()) => Ok(redirect::found("/login")),
        Err(UserStoreError::Duplicate { .. }) => Ok(pages::register_page(
            &RegistrationError::EmailTaken.to_string(),
        )),
        Err(error) => {
            tracing::error!(%error, "user store rejected registration");
            Ok(pages::register_page(
                &RegistrationError::StoreFailed.to_string(),
            ))
        }
    }
}

/// Render the login form.
#[get("/login")]
pub async fn login_form() -> HttpResponse {
    pages::login_page("Please login")
}

/// Validate a login attempt and establish the session.
///
/// The store lookup runs before the format checks are evaluated, but its
/// result is only consulted once they pass; format failures always win.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let attempt = LoginAttempt::from(form.into_inner());
    let resolved = state.users.login(&attempt.email, &attempt.password).await;

    if let Err(error) = attempt.validate() {
        return Ok(pages::login_page(&error.to_string()));
    }
    match resolved {
        Some(user) => {
            session.persist_identity(user.email())?;
            Ok(redirect::see_other("/"))
        }
        None => Ok(pages::login_page("login failed")),
    }
}

/// Clear the session identity and return home.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear_identity();
    redirect::found("/")
}
