//! Interactive controller for scroll-driven zooming.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: lifecycle and scroll hooks called by an input adapter
//! - **Output**: `InteractiveControllerPresenterPort` receives each rendered frame
//! - **Core**: rendering itself lives in `core/`

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
