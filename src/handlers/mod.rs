// handlers/mod.rs - HTTP handlers
//
// GET /hello     -> greeting (plain text)
// GET /health    -> liveness
// GET /contract  -> environment contract report

pub mod contract;
pub mod greeting;
pub mod health;

pub use contract::contract_report;
pub use greeting::hello;
pub use health::health;
