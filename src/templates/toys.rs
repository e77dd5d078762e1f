use std::fmt::Write;

use axum::response::Html;

use super::{escape, layout, text_input};
use crate::database::models::Toy;
use crate::forms::{toy as toy_form, FormErrors, ToyForm};
use crate::middleware::CurrentUser;

pub fn index(user: &CurrentUser, toys: &[Toy]) -> Html<String> {
    let mut content = String::from("<div class=\"page-header\">\n  <h1>All Toys</h1>\n</div>\n");
    if toys.is_empty() {
        content.push_str("<p>No toys yet.</p>\n");
    }
    for toy in toys {
        let _ = writeln!(
            content,
            r#"<div class="toy-container"><a href="{url}"><h2>{name}</h2></a><p>{color}</p></div>"#,
            url = toy.detail_url(),
            name = escape(&toy.name),
            color = escape(&toy.color),
        );
    }
    layout("Toys", Some(user), &content)
}

pub fn detail(user: &CurrentUser, toy: &Toy) -> Html<String> {
    let content = format!(
        r#"<div class="page-header">
  <h1>{name}</h1>
</div>
<section class="toy-detail">
  <p>Color: {color}</p>
</section>"#,
        name = escape(&toy.name),
        color = escape(&toy.color),
    );
    layout("Toy Details", Some(user), &content)
}

pub fn create_form(user: &CurrentUser, form: &ToyForm, errors: &FormErrors) -> Html<String> {
    let fields = [
        text_input("Name", "name", form.name.as_deref(), toy_form::NAME_MAX, errors),
        text_input("Color", "color", form.color.as_deref(), toy_form::COLOR_MAX, errors),
    ]
    .concat();
    let content = format!(
        r#"<div class="page-header">
  <h1>Add a Toy</h1>
</div>
<form action="/toys/create/" method="post" class="form-container">
{fields}
  <button type="submit" class="btn submit">Submit!</button>
</form>"#
    );
    layout("Add Toy", Some(user), &content)
}
