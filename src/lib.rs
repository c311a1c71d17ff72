pub mod api;
pub mod config;
pub mod console;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod templates_structs;
