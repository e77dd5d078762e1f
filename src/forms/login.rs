use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub next: Option<String>,
}

impl LoginForm {
    /// Both credentials present; the store decides whether they match
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

/// Only same-site absolute paths are followed after login.
///
/// Whitespace and control characters are refused outright: they are not
/// valid in a Location header, and browsers drop tabs and newlines before
/// resolving, which would turn `/\t/host` into `//host`.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.filter(|path| {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.contains('\\')
            && !path.chars().any(|c| c.is_whitespace() || c.is_control())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_must_be_local_path() {
        assert_eq!(safe_next(Some("/cats/")), Some("/cats/"));
        assert_eq!(safe_next(Some("//evil.example")), None);
        assert_eq!(safe_next(Some("https://evil.example")), None);
        assert_eq!(safe_next(Some("/\\evil.example")), None);
        assert_eq!(safe_next(None), None);
    }

    #[test]
    fn next_with_whitespace_or_controls_is_refused() {
        assert_eq!(safe_next(Some("/\t/evil.example")), None);
        assert_eq!(safe_next(Some("/\r\n/evil.example")), None);
        assert_eq!(safe_next(Some("/cats/\n")), None);
        assert_eq!(safe_next(Some("/cats/ 1/")), None);
        assert_eq!(safe_next(Some("/cats/\u{7f}")), None);
        assert_eq!(safe_next(Some("/cats/1/update/")), Some("/cats/1/update/"));
    }

    #[test]
    fn blank_credentials_are_absent() {
        let form = LoginForm {
            username: Some("  ".to_string()),
            password: Some("pw".to_string()),
            next: None,
        };
        assert_eq!(form.credentials(), None);
    }
}
