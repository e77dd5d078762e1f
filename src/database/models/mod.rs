pub mod cat;
pub mod feeding;
pub mod toy;
pub mod user;

pub use cat::{Cat, CatChanges, NewCat};
pub use feeding::{Feeding, Meal, NewFeeding};
pub use toy::{NewToy, Toy};
pub use user::{NewUser, User};
