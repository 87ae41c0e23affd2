pub mod browser;
pub mod commands;
pub mod render;
