//! View implementations for the registration form and admin panel.

pub mod admin;
pub mod form;
pub mod main;
pub mod traits;
