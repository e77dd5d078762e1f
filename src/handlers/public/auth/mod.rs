// handlers/public/auth/mod.rs - Account handlers
//
// Login verifies a username/password pair against the stored bcrypt hash and
// issues the signed session cookie. Signup creates the user and logs it in
// straight away. Logout clears the cookie.

pub mod login;
pub mod logout;
pub mod signup;

pub use login::login_post;
pub use logout::logout_post;
pub use signup::{signup_get, signup_post};
