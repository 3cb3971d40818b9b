pub mod components;
pub mod services;
pub mod style;
pub mod ui;
