//! Input adapters for the renderer.
//!
//! Receive events from a windowing system and translate them into
//! controller hooks.

#[cfg(feature = "gui")]
pub mod gui;
