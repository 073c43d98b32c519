//! HTTP request handlers.

pub mod controller;
pub mod health;

pub use controller::current_controller;
pub use health::health_check;
