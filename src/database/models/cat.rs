use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cat {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    /// Owning user
    pub user_id: i64,
}

/// Validated fields for a new cat. The owner is supplied separately by the caller
/// from the authenticated identity, never from the submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCat {
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

/// The mutable subset of a cat. Name is fixed once the cat exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatChanges {
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl Cat {
    pub fn detail_url(&self) -> String {
        format!("/cats/{}/", self.id)
    }

    pub fn apply(&mut self, changes: CatChanges) {
        self.breed = changes.breed;
        self.description = changes.description;
        self.age = changes.age;
    }
}
