pub mod admin;
pub mod form;
pub mod ui;
