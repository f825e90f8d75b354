pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod review;
pub mod simulate;
pub mod store;
