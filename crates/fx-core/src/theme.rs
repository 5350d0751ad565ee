//! Theme flag derived from the host page's `data-theme` attribute.

/// The page theme. A missing or empty attribute counts as dark; the host
/// only sets the attribute after its own startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            None | Some("") | Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}
