use dioxus::prelude::*;

/// Color modes available to the design system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// All modes in display order.
pub const ALL_MODES: &[ThemeMode] = &[ThemeMode::Dark, ThemeMode::Light];

impl ThemeMode {
    /// Internal key used for the cookie and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Parse a mode key, falling back to dark.
    pub fn from_key(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'dark';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active mode, persisting to a cookie and updating the document.
pub fn set_theme(mode: ThemeMode) {
    let key = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={key};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{key}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn theme_mode_key_roundtrip() {
        for mode in ALL_MODES {
            assert_eq!(ThemeMode::from_key(mode.as_str()), *mode);
        }
    }

    #[test]
    fn theme_mode_from_key_unknown_falls_back() {
        assert_eq!(ThemeMode::from_key("unknown"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Dark);
    }
}
