//! Test support for applications embedding the relay, a spy listener and a
//! few canned executors. Shipped as a normal module so downstream crates can
//! use it from their own tests.

mod scripted_executor;
mod spy_listener;
mod static_executors;

pub use scripted_executor::*;
pub use spy_listener::*;
pub use static_executors::*;
