//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller hands rendered frames to.

pub mod presenter;
