use axum::response::Html;

use super::{escape, layout};

pub const SIGNUP_ERROR: &str = "Invalid sign up - try again";

/// Signup form. Failures only ever show the generic message, never field detail.
pub fn signup(error_message: &str) -> Html<String> {
    let error = if error_message.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="red-text">{}</p>"#, escape(error_message))
    };

    let content = format!(
        r#"<div class="page-header">
  <h1>Sign Up</h1>
</div>
{error}
<form action="/accounts/signup/" method="post" class="form-container">
  <p><label for="id_username">Username:</label><input type="text" name="username" id="id_username" maxlength="150" autofocus required>
    <span class="helptext">Required. 150 characters or fewer. Letters, digits and @/./+/-/_ only.</span></p>
  <p><label for="id_password1">Password:</label><input type="password" name="password1" id="id_password1" required>
    <span class="helptext">Your password must contain at least 8 characters and can't be entirely numeric.</span></p>
  <p><label for="id_password2">Password confirmation:</label><input type="password" name="password2" id="id_password2" required>
    <span class="helptext">Enter the same password as before, for verification.</span></p>
  <button type="submit" class="btn submit">Submit!</button>
</form>"#
    );
    layout("Sign Up", None, &content)
}
