pub mod config;
pub mod generator;
pub mod minify;
pub mod restore;
