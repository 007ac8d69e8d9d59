//! Terminal UI components, views, and state management.

pub mod app;
pub mod colors;
pub mod components;
pub mod store;
pub mod views;

#[cfg(test)]
pub mod test_utils;
