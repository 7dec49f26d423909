use crate::error::DomError;

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "fas fa-sun",
            ThemeMode::Dark => "fas fa-moon",
        }
    }

    /// Follows the operating system preference, light when unknown.
    pub fn system() -> Self {
        let prefers_dark = web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Sets or clears the `dark` class on `<html>`.
    pub fn apply(self) -> Result<(), DomError> {
        let document = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?;
        let root = document.document_element().ok_or(DomError::NotMounted)?;
        let classes = root.class_list();
        match self {
            ThemeMode::Dark => classes.add_1(DARK_CLASS)?,
            ThemeMode::Light => classes.remove_1(DARK_CLASS)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().name(), "light");
    }
}
