use axum::response::Html;

use super::{escape_html, layout};

#[derive(Debug, Default)]
pub struct LoginPage {
    pub email: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub general_error: Option<String>,
}

fn field_error(error: &Option<String>) -> String {
    match error {
        Some(message) => format!("<span class=\"field-error\">{}</span>\n", escape_html(message)),
        None => String::new(),
    }
}

pub fn render(page: &LoginPage) -> Html<String> {
    let mut body = String::from("<h1>Log in</h1>\n");

    if let Some(error) = &page.general_error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/login\">\n");
    body.push_str(&format!(
        "<label>Email <input type=\"email\" name=\"email\" value=\"{}\"></label>\n",
        escape_html(&page.email)
    ));
    body.push_str(&field_error(&page.email_error));
    body.push_str("<label>Password <input type=\"password\" name=\"password\"></label>\n");
    body.push_str(&field_error(&page.password_error));
    body.push_str("<input type=\"hidden\" name=\"recaptcha_token\" value=\"\">\n");
    body.push_str("<button type=\"submit\">Log in</button>\n");
    body.push_str("</form>\n");
    body.push_str("<p><a href=\"/register\">Create an account</a></p>\n");

    layout::page("Log in", body)
}
