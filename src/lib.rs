pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod greeting;
pub mod handlers;
pub mod middleware;
pub mod server;
