pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod diff;
pub mod flavor;
pub mod lint;
pub mod render;
pub mod schema_loader;
