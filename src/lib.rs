pub mod app;
pub mod board;
pub mod cli;
pub mod drag;
pub mod engine;
pub mod ids;
pub mod logging;
pub mod projection;
pub mod realm;
pub mod settings;
pub mod types;
pub mod ui;
