use axum::response::Html;

use super::{escape_html, layout};

#[derive(Debug, Default)]
pub struct RegisterPage {
    pub firstname: String,
    pub lastname: String,
    pub school: String,
    pub email: String,
    pub error: Option<String>,
}

pub fn render(page: &RegisterPage) -> Html<String> {
    let mut body = String::from("<h1>Create an account</h1>\n");

    if let Some(error) = &page.error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/register\">\n");
    body.push_str(&format!(
        "<label>First name <input type=\"text\" name=\"firstname\" value=\"{}\"></label>\n",
        escape_html(&page.firstname)
    ));
    body.push_str(&format!(
        "<label>Last name <input type=\"text\" name=\"lastname\" value=\"{}\"></label>\n",
        escape_html(&page.lastname)
    ));
    body.push_str(&format!(
        "<label>School (optional) <input type=\"text\" name=\"school\" value=\"{}\"></label>\n",
        escape_html(&page.school)
    ));
    body.push_str(&format!(
        "<label>Email <input type=\"email\" name=\"email\" value=\"{}\"></label>\n",
        escape_html(&page.email)
    ));
    body.push_str("<label>Password <input type=\"password\" name=\"password\"></label>\n");
    body.push_str("<input type=\"hidden\" name=\"recaptcha_token\" value=\"\">\n");
    body.push_str("<button type=\"submit\">Register</button>\n");
    body.push_str("</form>\n");
    body.push_str("<p><a href=\"/login\">Back to login</a></p>\n");

    layout::page("Register", body)
}
