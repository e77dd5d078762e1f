use serde::Deserialize;

use super::{required_integer, required_text, FormErrors};
use crate::database::models::{Cat, CatChanges, NewCat};

pub const NAME_MAX: usize = 100;
pub const BREED_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 250;

/// Fields accepted when creating a cat. Any owner field in the payload is
/// not part of this struct and is dropped during deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CatCreateForm {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub description: Option<String>,
    pub age: Option<String>,
}

impl CatCreateForm {
    pub fn validate(&self) -> Result<NewCat, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required_text(&mut errors, "name", self.name.as_deref(), NAME_MAX);
        let breed = required_text(&mut errors, "breed", self.breed.as_deref(), BREED_MAX);
        let description = required_text(&mut errors, "description", self.description.as_deref(), DESCRIPTION_MAX);
        let age = required_integer(&mut errors, "age", self.age.as_deref());

        errors.into_result(|| NewCat {
            name,
            breed,
            description,
            age,
        })
    }
}

/// Fields accepted when editing a cat. There is no name field: a cat keeps
/// the name it was created with.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CatUpdateForm {
    pub breed: Option<String>,
    pub description: Option<String>,
    pub age: Option<String>,
}

impl CatUpdateForm {
    /// Prefill from the stored cat for the edit page
    pub fn from_cat(cat: &Cat) -> Self {
        Self {
            breed: Some(cat.breed.clone()),
            description: Some(cat.description.clone()),
            age: Some(cat.age.to_string()),
        }
    }

    pub fn validate(&self) -> Result<CatChanges, FormErrors> {
        let mut errors = FormErrors::new();
        let breed = required_text(&mut errors, "breed", self.breed.as_deref(), BREED_MAX);
        let description = required_text(&mut errors, "description", self.description.as_deref(), DESCRIPTION_MAX);
        let age = required_integer(&mut errors, "age", self.age.as_deref());

        errors.into_result(|| CatChanges { breed, description, age })
    }
}
