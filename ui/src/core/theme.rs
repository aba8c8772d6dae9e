//! Resolved colour theme, as reported by the host's theme provider.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedTheme(pub String);

impl ResolvedTheme {
    pub fn light() -> Self {
        Self("light".into())
    }

    pub fn dark() -> Self {
        Self("dark".into())
    }

    /// Any theme whose name mentions "dark" (e.g. `deep-dark`) counts.
    pub fn is_dark(&self) -> bool {
        self.0.contains("dark")
    }

    /// An explicit stored choice wins; `system` or nothing defers to the OS.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(str::trim) {
            Some(name) if !name.is_empty() && name != "system" => Self(name.to_string()),
            _ if prefers_dark => Self::dark(),
            _ => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_variants_are_dark() {
        assert!(ResolvedTheme::dark().is_dark());
        assert!(ResolvedTheme("classic-dark".into()).is_dark());
        assert!(!ResolvedTheme::light().is_dark());
        assert!(!ResolvedTheme::default().is_dark());
    }

    #[test]
    fn stored_choice_overrides_system() {
        assert_eq!(ResolvedTheme::resolve(Some("light"), true), ResolvedTheme::light());
        assert_eq!(ResolvedTheme::resolve(Some("system"), true), ResolvedTheme::dark());
        assert_eq!(ResolvedTheme::resolve(None, false), ResolvedTheme::light());
        assert_eq!(ResolvedTheme::resolve(Some(""), true), ResolvedTheme::dark());
    }
}
