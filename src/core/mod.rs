pub mod app;
pub mod config;
pub mod tree;
