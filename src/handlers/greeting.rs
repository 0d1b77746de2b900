// handlers/greeting.rs - GET /hello handler

use crate::greeting::GreetingService;

pub async fn hello() -> &'static str {
    GreetingService::new().greet()
}
