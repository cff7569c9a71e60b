pub mod bot;
pub mod config;
pub mod quiz;
pub mod session;
