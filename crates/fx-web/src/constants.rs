// Backdrop palette

pub const DARK_BG_INNER: &str = "#1a1a2e";
pub const DARK_BG_OUTER: &str = "#000000";
pub const LIGHT_BG: &str = "#f8fafc";

// Theme watching

pub const THEME_ATTRIBUTE: &str = "data-theme";
// The host sets the initial theme after load; sample once shortly after
pub const THEME_INITIAL_CHECK_MS: i32 = 100;
// Poll cadence when MutationObserver is unavailable
pub const THEME_POLL_INTERVAL_MS: i32 = 500;

// Cursor

pub const HOVER_CLASS: &str = "hovering";
pub const MAGNET_HOVER_SCALE: f32 = 1.05;
pub const MAGNETIC_SELECTORS: &str =
    "a, button, .btn, .project-card, .stat-card, .quote-card, .experience-item, .theme-toggle, .skill-tag";
