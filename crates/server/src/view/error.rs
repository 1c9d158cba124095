use axum::response::Html;

use super::layout;

pub fn render_not_found() -> Html<String> {
    layout::page(
        "Not Found",
        "<h1>404</h1>\n<p>The page you requested could not be found.</p>\n".to_string(),
    )
}
