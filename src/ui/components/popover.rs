//! Centered dialogs layered on top of the current view.

pub mod base;
pub mod simple;
