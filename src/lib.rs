// Library root — re-exports all modules so integration tests can `use marquee::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod tui;
pub mod ui;
