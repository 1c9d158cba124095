use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shared::{session::SESSION_COOKIE, state::AppState};
use std::sync::Arc;
use uuid::Uuid;

/// Session data riding on requests that passed the gate.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: Uuid,
    pub user_id: i32,
    pub user_email: String,
}

/// Read the session token from the request cookies, if any.
pub fn session_token(cookie_jar: &CookieJar) -> Option<Uuid> {
    cookie_jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Gate for the course routes: without a live session the request is
/// redirected to the login page and goes no further.
pub async fn require_session(
    cookie_jar: CookieJar,
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = session_token(&cookie_jar) else {
        return Redirect::to("/login").into_response();
    };

    let Some(session) = state.session_store.get(&token).await else {
        return Redirect::to("/login").into_response();
    };

    req.extensions_mut().insert(CurrentSession {
        token,
        user_id: session.user_id,
        user_email: session.user_email,
    });

    next.run(req).await
}
