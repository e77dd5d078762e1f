use std::fmt::Write;

use axum::response::Html;

use super::{escape, field_errors, layout, text_input};
use crate::database::models::{Cat, Feeding, Meal, Toy};
use crate::forms::{cat as cat_form, CatCreateForm, CatUpdateForm, FeedingForm, FormErrors};
use crate::middleware::CurrentUser;

pub fn index(user: &CurrentUser, cats: &[Cat]) -> Html<String> {
    let mut content = String::from("<div class=\"page-header\">\n  <h1>Cat List</h1>\n</div>\n");
    if cats.is_empty() {
        content.push_str("<p>You have not added any cats yet.</p>\n");
    }
    for cat in cats {
        let _ = write!(
            content,
            r#"<div class="card">
  <a href="{url}">
    <div class="card-content">
      <h2 class="card-title">{name}</h2>
      <p>{summary}</p>
      <p><small>{description}</small></p>
    </div>
  </a>
</div>
"#,
            url = cat.detail_url(),
            name = escape(&cat.name),
            summary = summary(cat),
            description = escape(&cat.description),
        );
    }
    layout("Cats", Some(user), &content)
}

/// "A 2 year old Tabby", or "A Tabby kitten" under a year
fn summary(cat: &Cat) -> String {
    let breed = escape(&cat.breed);
    if cat.age > 0 {
        format!("A {} year old {}", cat.age, breed)
    } else {
        format!("A {} kitten", breed)
    }
}

/// Everything the detail page shows about one cat
pub struct CatDetail<'a> {
    pub cat: &'a Cat,
    pub feedings: &'a [Feeding],
    pub toys: &'a [Toy],
    pub available_toys: &'a [Toy],
    pub feeding_form: &'a FeedingForm,
}

pub fn detail(user: &CurrentUser, page: CatDetail<'_>) -> Html<String> {
    let cat = page.cat;
    let mut content = format!(
        r#"<section class="cat-container">
  <div class="cat-details">
    <h1>{name}</h1>
    <h2>{summary}</h2>
    <p>{description}</p>
    <div class="cat-actions">
      <a href="/cats/{id}/update/" class="btn warn">Edit</a>
      <a href="/cats/{id}/delete/" class="btn danger">Delete</a>
    </div>
  </div>
</section>
"#,
        id = cat.id,
        name = escape(&cat.name),
        summary = summary(cat),
        description = escape(&cat.description),
    );

    content.push_str("<div class=\"feedings-toy-container\">\n<section class=\"feedings\">\n  <div class=\"subsection-title\"><h2>Feedings</h2></div>\n");
    content.push_str(&feeding_form(cat.id, page.feeding_form));
    if page.feedings.is_empty() {
        let _ = writeln!(content, "  <div class=\"subsection-content\"><p>{} has never been fed 😔</p></div>", escape(&cat.name));
    } else {
        content.push_str("  <table>\n    <thead><tr><th>Date</th><th>Meal</th></tr></thead>\n    <tbody>\n");
        for feeding in page.feedings {
            let _ = writeln!(
                content,
                "      <tr><td>{}</td><td>{}</td></tr>",
                feeding.date.format("%Y-%m-%d"),
                feeding.meal.label()
            );
        }
        content.push_str("    </tbody>\n  </table>\n");
    }
    content.push_str("</section>\n");

    content.push_str("<section class=\"toys\">\n  <div class=\"subsection-title\"><h2>Toys</h2></div>\n  <h3>");
    content.push_str(&escape(&cat.name));
    content.push_str("'s Toys</h3>\n");
    if page.toys.is_empty() {
        let _ = writeln!(content, "  <div class=\"subsection-content\"><p>{} doesn't have any toys 😞</p></div>", escape(&cat.name));
    }
    for toy in page.toys {
        let _ = writeln!(
            content,
            r#"  <div class="toy-container"><a href="{url}">{name}</a> <span>{color}</span>
    <form action="/cats/{cat_id}/unassoc_toy/{toy_id}/" method="post"><button type="submit" class="btn danger">Remove Toy</button></form></div>"#,
            url = toy.detail_url(),
            name = escape(&toy.name),
            color = escape(&toy.color),
            cat_id = cat.id,
            toy_id = toy.id,
        );
    }
    content.push_str("  <h3>Available Toys</h3>\n");
    if page.available_toys.is_empty() {
        let _ = writeln!(content, "  <p class=\"all-toys\">{} already has all the available toys 🥳</p>", escape(&cat.name));
    }
    for toy in page.available_toys {
        let _ = writeln!(
            content,
            r#"  <div class="toy-container"><a href="{url}">{name}</a> <span>{color}</span>
    <form action="/cats/{cat_id}/assoc_toy/{toy_id}/" method="post"><button type="submit" class="btn submit">Give toy</button></form></div>"#,
            url = toy.detail_url(),
            name = escape(&toy.name),
            color = escape(&toy.color),
            cat_id = cat.id,
            toy_id = toy.id,
        );
    }
    content.push_str("</section>\n</div>\n");

    layout("Cat Details", Some(user), &content)
}

fn feeding_form(cat_id: i64, form: &FeedingForm) -> String {
    let selected = form
        .meal
        .as_deref()
        .and_then(Meal::from_code)
        .unwrap_or_default();
    let mut options = String::new();
    for meal in Meal::ALL {
        let _ = write!(
            options,
            r#"<option value="{code}"{sel}>{label}</option>"#,
            code = meal.code(),
            sel = if meal == selected { " selected" } else { "" },
            label = meal.label(),
        );
    }
    format!(
        r#"  <h3>Add a Feeding</h3>
  <form action="/cats/{cat_id}/add_feeding/" method="post" class="subsection-content" autocomplete="off">
    <p><label for="id_date">Feeding date:</label><input type="date" name="date" id="id_date" value="{date}" required></p>
    <p><label for="id_meal">Meal:</label><select name="meal" id="id_meal">{options}</select></p>
    <button type="submit" class="btn submit">Add Feeding</button>
  </form>
"#,
        date = escape(form.date.as_deref().unwrap_or_default()),
    )
}

pub fn create_form(user: &CurrentUser, form: &CatCreateForm, errors: &FormErrors) -> Html<String> {
    let fields = [
        text_input("Name", "name", form.name.as_deref(), cat_form::NAME_MAX, errors),
        text_input("Breed", "breed", form.breed.as_deref(), cat_form::BREED_MAX, errors),
        description_input(form.description.as_deref(), errors),
        age_input(form.age.as_deref(), errors),
    ]
    .concat();
    let content = format!(
        r#"<div class="page-header">
  <h1>Add a Cat</h1>
</div>
<form action="/cats/create/" method="post" class="form-container">
{fields}
  <button type="submit" class="btn submit">Submit!</button>
</form>"#
    );
    layout("Add Cat", Some(user), &content)
}

pub fn update_form(user: &CurrentUser, cat: &Cat, form: &CatUpdateForm, errors: &FormErrors) -> Html<String> {
    let fields = [
        text_input("Breed", "breed", form.breed.as_deref(), cat_form::BREED_MAX, errors),
        description_input(form.description.as_deref(), errors),
        age_input(form.age.as_deref(), errors),
    ]
    .concat();
    let content = format!(
        r#"<div class="page-header">
  <h1>Edit {name}</h1>
</div>
<form action="/cats/{id}/update/" method="post" class="form-container">
{fields}
  <button type="submit" class="btn submit">Submit!</button>
</form>"#,
        name = escape(&cat.name),
        id = cat.id,
    );
    layout("Edit Cat", Some(user), &content)
}

fn description_input(value: Option<&str>, errors: &FormErrors) -> String {
    format!(
        r#"<p><label for="id_description">Description:</label>{errs}<textarea name="description" id="id_description" maxlength="{max}" cols="40" rows="10" required>{value}</textarea></p>"#,
        errs = field_errors(errors, "description"),
        max = cat_form::DESCRIPTION_MAX,
        value = escape(value.unwrap_or_default()),
    )
}

fn age_input(value: Option<&str>, errors: &FormErrors) -> String {
    format!(
        r#"<p><label for="id_age">Age:</label>{errs}<input type="number" name="age" id="id_age" value="{value}" required></p>"#,
        errs = field_errors(errors, "age"),
        value = escape(value.unwrap_or_default()),
    )
}

pub fn confirm_delete(user: &CurrentUser, cat: &Cat) -> Html<String> {
    let content = format!(
        r#"<div class="page-header">
  <h1>Delete Cat?</h1>
</div>
<h2>Are you sure you want to delete {name}?</h2>
<form action="/cats/{id}/delete/" method="post" class="form-container">
  <a href="{url}" class="btn secondary">Cancel</a>
  <button type="submit" class="btn danger">Yes - Delete!</button>
</form>"#,
        name = escape(&cat.name),
        id = cat.id,
        url = cat.detail_url(),
    );
    layout("Delete Cat", Some(user), &content)
}
