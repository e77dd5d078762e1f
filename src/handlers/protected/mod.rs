// handlers/protected/mod.rs - Handlers behind the login gate
//
// Every handler here expects `CurrentUser` in the request extensions,
// which the router guarantees by layering `require_login` over them.

pub mod cats;
pub mod feedings;
pub mod toys;

pub use feedings::add_feeding;
