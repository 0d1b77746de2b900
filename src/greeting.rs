use serde::{Deserialize, Serialize};

/// Greeting returned by `GET /hello`. Existing clients compare it byte for byte.
pub const GREETING: &str = "Hello from dockauto demo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub text: String,
}

/// Stateless greeting service
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }

    pub fn greet(&self) -> &'static str {
        GREETING
    }

    pub fn response(&self) -> GreetingResponse {
        GreetingResponse {
            text: self.greet().to_string(),
        }
    }
}
