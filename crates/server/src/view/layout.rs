use axum::response::Html;

use super::escape_html;

pub fn page(title: &str, body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | Course Portal</title>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        escape_html(title)
    ))
}
