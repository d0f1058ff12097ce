//! Business Logic
//!
//! This module contains pure functions and types that can be unit tested:
//! - counter: Hero counter and progress bar timing
//! - document: Page layout into rows, sections and reveal blocks
//! - formatting: Clock text, word wrap, bar cells
//! - layout: Terminal-to-viewport sizing
//! - navigation: Active section, scroll targets, menu selection
//! - reveal: Viewport intersection and entrance effects
//! - transition: Timed value interpolation
//! - typing: Typing-effect headline

pub mod counter;
pub mod document;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod reveal;
pub mod transition;
pub mod typing;
