//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process one event.
//! Timer events are dispatched by `App::tick` instead.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
