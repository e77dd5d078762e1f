// templates/mod.rs - Server-side HTML rendering
//
// Pages are plain functions returning `Html<String>`. Every value that came
// from a user or the database goes through `escape` before it is written.

use std::fmt::Write;

use axum::response::Html;

use crate::forms::FormErrors;
use crate::middleware::CurrentUser;

pub mod accounts;
pub mod cats;
pub mod errors;
pub mod home;
pub mod toys;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site chrome
pub fn layout(title: &str, user: Option<&CurrentUser>, content: &str) -> Html<String> {
    let nav = match user {
        Some(user) => format!(
            r#"<li><a href="/about/">About</a></li>
        <li><a href="/cats/">All Cats</a></li>
        <li><a href="/cats/create/">Add a Cat</a></li>
        <li><a href="/toys/">View All Toys</a></li>
        <li><a href="/toys/create/">Add a Toy</a></li>
        <li>
          <form action="/accounts/logout/" method="post" class="logout">
            <button type="submit">Log out {}</button>
          </form>
        </li>"#,
            escape(&user.username)
        ),
        None => r#"<li><a href="/about/">About</a></li>
        <li><a href="/">Login</a></li>
        <li><a href="/accounts/signup/">Sign Up</a></li>"#
            .to_string(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Cat Collector | {title}</title>
  </head>
  <body>
    <header>
      <div class="header-logo-container"><a href="/home/">Cat Collector</a></div>
      <nav>
        <ul>
        {nav}
        </ul>
      </nav>
    </header>
    <main>
{content}
    </main>
  </body>
</html>
"#,
        title = escape(title),
    ))
}

/// `<ul class="errorlist">` for one field, empty when the field is clean
pub(crate) fn field_errors(errors: &FormErrors, field: &str) -> String {
    let messages = errors.field(field);
    if messages.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<ul class="errorlist">"#);
    for message in messages {
        let _ = write!(out, "<li>{}</li>", escape(message));
    }
    out.push_str("</ul>");
    out
}

/// Labeled text input with its errors
pub(crate) fn text_input(
    label: &str,
    name: &str,
    value: Option<&str>,
    max_length: usize,
    errors: &FormErrors,
) -> String {
    format!(
        r#"<p><label for="id_{name}">{label}:</label>{errs}<input type="text" name="{name}" id="id_{name}" maxlength="{max_length}" value="{value}" required></p>"#,
        errs = field_errors(errors, name),
        value = escape(value.unwrap_or_default()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn nav_depends_on_session() {
        let Html(anonymous) = layout("Home", None, "");
        assert!(anonymous.contains("/accounts/signup/"));
        assert!(!anonymous.contains("/accounts/logout/"));

        let user = CurrentUser {
            id: 1,
            username: "<alice>".to_string(),
        };
        let Html(signed_in) = layout("Home", Some(&user), "");
        assert!(signed_in.contains("/accounts/logout/"));
        assert!(signed_in.contains("Log out &lt;alice&gt;"));
    }
}
