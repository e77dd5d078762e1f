use axum::response::Html;

use super::{escape, layout};
use crate::middleware::CurrentUser;

pub const LOGIN_ERROR: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Home page doubling as the login screen
pub fn home(user: Option<&CurrentUser>, login_error: Option<&str>, username: &str, next: Option<&str>) -> Html<String> {
    let error = login_error
        .map(|message| format!(r#"<p class="red-text">{}</p>"#, escape(message)))
        .unwrap_or_default();
    let next = next
        .map(|path| format!(r#"<input type="hidden" name="next" value="{}">"#, escape(path)))
        .unwrap_or_default();

    let content = format!(
        r#"<section class="logo-container">
  <h1>Cat Collector</h1>
  <p>Keep track of your cats, when they ate and what they play with.</p>
</section>
<section>
  <h2>Login</h2>
  {error}
  <form action="/" method="post" class="login">
    <p><label for="id_username">Username:</label><input type="text" name="username" id="id_username" maxlength="150" value="{username}" autofocus required></p>
    <p><label for="id_password">Password:</label><input type="password" name="password" id="id_password" required></p>
    {next}
    <button type="submit" class="btn submit">Login</button>
  </form>
</section>"#,
        username = escape(username),
    );
    layout("Home", user, &content)
}

pub fn about(user: Option<&CurrentUser>) -> Html<String> {
    let content = r#"<div class="page-header">
  <h1>About the Cat Collector</h1>
</div>
<p>Cat Collector keeps a record of every cat you own, each meal it has eaten and the toys it plays with.</p>
<p>Cats are private to the account that adds them. Toys are shared by everyone.</p>"#;
    layout("About", user, content)
}
