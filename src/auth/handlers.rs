use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use tracing::{error, instrument, warn};

use crate::{
    auth::{
        dto::{Credentials, CredentialsForm},
        errors::AuthError,
        services::{self, LoginOutcome},
    },
    state::AppState,
    views::{self, ViewError},
};

pub const SIGNUP_ERROR: &str = "Error during signup";
pub const LOGIN_ERROR: &str = "Error during login";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const MISSING_FIELDS: &str = "Email and password are required.";

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ViewError> {
    state.views.render(views::HOME)
}

pub async fn signup_page(State(state): State<AppState>) -> Result<Html<String>, ViewError> {
    state.views.render(views::SIGNUP)
}

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, ViewError> {
    state.views.render(views::LOGIN)
}

#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Response {
    let creds = match read_credentials(form) {
        Ok(c) => c,
        Err(e) => return reject_input(e),
    };

    match services::signup(state.users.as_ref(), creds).await {
        Ok(()) => state.views.render(views::ACCESS).into_response(),
        Err(e) => {
            error!(error = ?e, "signup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, SIGNUP_ERROR).into_response()
        }
    }
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Response {
    let creds = match read_credentials(form) {
        Ok(c) => c,
        Err(e) => return reject_input(e),
    };

    match services::login(state.users.as_ref(), creds).await {
        Ok(LoginOutcome::Granted) => state.views.render(views::ACCESS).into_response(),
        Ok(LoginOutcome::Rejected) => {
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS).into_response()
        }
        Err(e) => {
            error!(error = ?e, "login failed");
            (StatusCode::INTERNAL_SERVER_ERROR, LOGIN_ERROR).into_response()
        }
    }
}

/// Any problem with the body itself, from a wrong content type to an absent field,
/// gets the same plain answer.
fn read_credentials(
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<Credentials, AuthError> {
    let Form(form) = form?;
    Credentials::try_from(form)
}

fn reject_input(e: AuthError) -> Response {
    warn!(error = %e, "rejected form input");
    (StatusCode::BAD_REQUEST, MISSING_FIELDS).into_response()
}
