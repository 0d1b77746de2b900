pub mod check;
pub mod greet;
pub mod profile;
