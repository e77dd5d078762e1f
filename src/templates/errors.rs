use axum::{http::StatusCode, response::Html};

use super::{escape, layout};

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        "<h1>{} {}</h1>\n<p>{}</p>",
        status.as_u16(),
        escape(reason),
        escape(message)
    );
    layout(reason, None, &content)
}
