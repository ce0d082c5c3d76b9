pub mod body;
pub mod config;
