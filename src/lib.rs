//! ITSA TUI Library
//!
//! The society landing page as a terminal app. Exposes modules for the
//! binary and for testing:
//!
//! - overlay: toast and splash lifecycle (the overlay manager)
//! - scheduler: clocks and timer queues
//! - logic: pure page logic
//! - model / app: page state and its orchestration
//! - ui / handlers: rendering and keyboard input

pub mod app;
pub mod config;
pub mod content;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod overlay;
pub mod scheduler;
pub mod ui;
pub mod utils;

pub use app::App;
