pub mod client;
pub mod config;
pub mod item;
pub mod suite;
