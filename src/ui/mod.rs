// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (navbar, page, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - navbar: Renders top bar (society name, section links, clock)
// - menu: Renders the collapsed navigation menu
// - page: Renders the scrolling page with its animations
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - toast: Renders toast notifications sliding in from the right
// - splash: Renders the full-screen loading splash

pub mod layout;
pub mod legend;
pub mod menu;
pub mod navbar;
pub mod page;
pub mod render;
pub mod splash;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
