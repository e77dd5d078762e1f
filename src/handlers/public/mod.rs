// handlers/public/mod.rs - Public handlers (no session required)
//
// Landing pages and the account flows that establish or end a session.
// Handlers here may still see a `CurrentUser` when a valid session cookie was
// sent, and use it only to adjust navigation.

pub mod auth;
pub mod pages;

pub use auth::*;
pub use pages::{about, health, home_alias, home_get};
