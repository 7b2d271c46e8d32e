pub mod app;
pub mod clipboard;
pub mod engine;
pub mod ui;
