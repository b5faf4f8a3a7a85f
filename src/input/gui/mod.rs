//! Windowed input adapter.
//!
//! winit owns the event loop, pixels holds the framebuffer and egui draws the
//! optional overlay. Redraws happen only on startup and after input.

pub mod app;
pub mod commands;
pub mod scroll;
