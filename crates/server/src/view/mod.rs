pub mod dashboard;
pub mod error;
pub mod layout;
pub mod login;
pub mod register;

use shared::session::{FlashLevel, FlashMessage};

/// Escape a value for interpolation into HTML text or attribute position.
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

pub(crate) fn flash_banner(flash: &FlashMessage) -> String {
    let class = match flash.level {
        FlashLevel::Success => "flash flash-success",
        FlashLevel::Error => "flash flash-error",
    };

    format!(
        "<p class=\"{class}\">{}</p>\n",
        escape_html(&flash.text)
    )
}
