use crate::storage::{load_string, save_string, THEME_KEY};
use leptos::prelude::*;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Unknown or missing stored values fall back to `System`.
    pub fn parse_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| Self::from_str(s.trim()).ok())
            .unwrap_or_default()
    }

    pub fn is_dark(self, system_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::System => "🖥️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

fn apply_dark_class(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

/// Theme preference plus the live system setting.
#[derive(Clone, Copy)]
pub struct ThemeController {
    pub preference: RwSignal<ThemePreference>,
    pub system_dark: RwSignal<bool>,
}

impl ThemeController {
    pub fn load() -> Self {
        let stored = load_string(THEME_KEY);
        let system_dark = dark_media_query().map(|m| m.matches()).unwrap_or(false);
        Self {
            preference: RwSignal::new(ThemePreference::parse_stored(stored.as_deref())),
            system_dark: RwSignal::new(system_dark),
        }
    }

    /// Keep `<html class="dark">` in sync and follow OS theme changes.
    /// Called once from the root component.
    pub fn install(self) {
        let system_dark = self.system_dark;
        if let Some(mq) = dark_media_query() {
            let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| {
                    system_dark.set(ev.matches());
                },
            );
            mq.set_onchange(Some(on_change.as_ref().unchecked_ref()));
            // Lives for the whole page.
            on_change.forget();
        }

        Effect::new(move |_| {
            let pref = self.preference.get();
            apply_dark_class(pref.is_dark(self.system_dark.get()));
        });
    }

    pub fn set(self, pref: ThemePreference) {
        save_string(THEME_KEY, &pref.to_string());
        self.preference.set(pref);
    }

    pub fn is_dark(self) -> bool {
        self.preference.get().is_dark(self.system_dark.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_is_dark_resolution() {
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::Dark.is_dark(false));
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::System.is_dark(false));
    }

    #[test]
    fn test_stored_string_forms() {
        for pref in ThemePreference::iter() {
            let s = pref.to_string();
            assert_eq!(ThemePreference::parse_stored(Some(&s)), pref);
        }
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::parse_stored(Some("sepia")), ThemePreference::System);
        assert_eq!(ThemePreference::parse_stored(None), ThemePreference::System);
    }
}
