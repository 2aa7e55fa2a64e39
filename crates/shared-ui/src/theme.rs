use dioxus::prelude::*;

/// Color scheme of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    /// Saffron-on-white government palette.
    #[default]
    Daylight,
    /// Dark variant for evening use.
    Dusk,
}

impl Theme {
    /// Value written to the cookie and to `data-theme` on `<html>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Daylight => "daylight",
            Theme::Dusk => "dusk",
        }
    }

    /// Parse a cookie value, falling back to Daylight.
    pub fn from_key(s: &str) -> Self {
        match s.trim() {
            "dusk" | "dark" => Theme::Dusk,
            _ => Theme::Daylight,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Daylight => Theme::Dusk,
            Theme::Dusk => Theme::Daylight,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dusk)
    }
}

/// Theme held in context so the header toggle and any page can read it.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

impl ThemeState {
    /// Flip between light and dark and apply the result.
    pub fn toggle(&mut self) {
        let next = self.theme.read().toggled();
        self.theme.set(next);
        set_theme(next);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Render once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'daylight';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Persist `theme` to a cookie and apply it to the document.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(theme: Theme) {
    let theme = theme.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage('{theme}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_daylight() {
        assert_eq!(Theme::default(), Theme::Daylight);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn key_roundtrip() {
        for theme in [Theme::Daylight, Theme::Dusk] {
            assert_eq!(Theme::from_key(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_daylight() {
        assert_eq!(Theme::from_key("cyberpunk"), Theme::Daylight);
        assert_eq!(Theme::from_key(""), Theme::Daylight);
        assert_eq!(Theme::from_key("dark"), Theme::Dusk);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Daylight.toggled(), Theme::Dusk);
        assert_eq!(Theme::Dusk.toggled().toggled(), Theme::Dusk);
    }
}
