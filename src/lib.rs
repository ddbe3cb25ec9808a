// Public library interface for integration tests and the binary.
pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod keymap;
pub mod runtime;
pub mod runtime_util;
pub mod session;
pub mod trace;
pub mod ui;

pub use app::App;
