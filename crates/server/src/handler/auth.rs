use crate::{
    middleware::session::session_token,
    view::{
        login::{self, LoginPage},
        register::{self, RegisterPage},
    },
};
use axum::{
    Json, Router,
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    domain::{
        request::auth::{LoginRequest, RegisterRequest},
        response::SessionCheckResponse,
    },
    session::SESSION_COOKIE,
    state::AppState,
    utils::AppError,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

fn session_cookie(token: Uuid) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    cookie
}

fn field_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors.field_errors().get(field).and_then(|list| {
        list.iter()
            .find_map(|err| err.message.as_ref().map(|message| message.to_string()))
    })
}

pub async fn login_form_handler() -> Html<String> {
    login::render(&LoginPage::default())
}

pub async fn login_handler(
    State(data): State<Arc<AppState>>,
    jar: CookieJar,
    Form(mut body): Form<LoginRequest>,
) -> Response {
    body.email = body.email.trim().to_string();

    let mut page = LoginPage {
        email: body.email.clone(),
        ..Default::default()
    };

    // Both fields are checked; neither error short-circuits the other.
    if let Err(errors) = body.validate() {
        page.email_error = field_message(&errors, "email");
        page.password_error = field_message(&errors, "password");
        return login::render(&page).into_response();
    }

    match data.di_container.auth_service.login_user(&body).await {
        Ok(user) => {
            // Rotate the identifier before storing the identity so a token
            // fixed before authentication never survives it.
            let previous = session_token(&jar);
            let token = data
                .session_store
                .rotate(previous, user.id, &user.email)
                .await;

            (jar.add(session_cookie(token)), Redirect::to("/dashboard")).into_response()
        }
        Err(err) => {
            if !matches!(err, AppError::InvalidCredentials) {
                error!("Login failed: {err}");
            }

            // One message for unknown email and wrong password alike.
            page.general_error = Some("Invalid email or password.".to_string());
            login::render(&page).into_response()
        }
    }
}

pub async fn register_form_handler() -> Html<String> {
    register::render(&RegisterPage::default())
}

pub async fn register_handler(
    State(data): State<Arc<AppState>>,
    Form(body): Form<RegisterRequest>,
) -> Response {
    let mut page = RegisterPage {
        firstname: body.firstname.clone(),
        lastname: body.lastname.clone(),
        school: body.school.clone(),
        email: body.email.clone(),
        error: None,
    };

    if body.validate().is_err() {
        page.error = Some("First name, last name, email, and password are required.".to_string());
        return register::render(&page).into_response();
    }

    match data.di_container.auth_service.register_user(&body).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(AppError::EmailAlreadyExists) => {
            page.error = Some("Email already registered.".to_string());
            register::render(&page).into_response()
        }
        Err(err) => {
            // Internal detail goes to the log, never to the client.
            error!("Registration failed: {err}");
            page.error = Some("Registration failed. Please try again.".to_string());
            register::render(&page).into_response()
        }
    }
}

pub async fn logout_handler(State(data): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    // Idempotent: logging out without a session is not an error.
    if let Some(token) = session_token(&jar) {
        data.session_store.destroy(&token).await;
    }

    (jar.remove(removal_cookie()), Redirect::to("/login"))
}

pub async fn check_handler(
    State(data): State<Arc<AppState>>,
    jar: CookieJar,
) -> Json<SessionCheckResponse> {
    let authenticated = match session_token(&jar) {
        Some(token) => data.session_store.get(&token).await.is_some(),
        None => false,
    };

    Json(SessionCheckResponse { authenticated })
}

pub fn auth_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(login_form_handler))
        .route("/login", get(login_form_handler).post(login_handler))
        .route(
            "/register",
            get(register_form_handler).post(register_handler),
        )
        .route("/logout", get(logout_handler))
        .route("/auth/check", get(check_handler))
        .with_state(app_state)
}
