mod api;
mod dispatch;
mod listener;
mod outcome;
mod relay_error;

pub mod prelude;
pub mod testkit;

pub use prelude::*;
