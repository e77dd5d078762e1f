pub mod require_login;
pub mod session;

pub use require_login::{require_login, LOGIN_URL};
pub use session::{load_session, CurrentUser};
