use serde::Deserialize;

use super::{required_text, FormErrors};
use crate::database::models::NewToy;

pub const NAME_MAX: usize = 50;
pub const COLOR_MAX: usize = 20;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ToyForm {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl ToyForm {
    pub fn validate(&self) -> Result<NewToy, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required_text(&mut errors, "name", self.name.as_deref(), NAME_MAX);
        let color = required_text(&mut errors, "color", self.color.as_deref(), COLOR_MAX);

        errors.into_result(|| NewToy { name, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_bounded() {
        let ok = ToyForm {
            name: Some("Laser".to_string()),
            color: Some("Red".to_string()),
        };
        assert_eq!(ok.validate().unwrap().color, "Red");

        let long = ToyForm {
            name: Some("Laser".to_string()),
            color: Some("Ultraviolet-ish magenta".to_string()),
        };
        assert!(long.validate().unwrap_err().contains("color"));
    }
}
