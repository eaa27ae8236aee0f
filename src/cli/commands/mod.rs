//! CLI command modules

pub mod init;
pub mod render;
pub mod sitemap;
pub mod validate;
