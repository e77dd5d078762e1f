// handlers/protected/toys/mod.rs - Toy catalog handlers
//
// Toys are shared between all users; there is no owner filter here.

pub mod create;
pub mod detail;
pub mod index;

pub use create::{create_get, create_post};
pub use detail::detail_get;
pub use index::index_get;
