mod operation_dispatcher;
mod operation_executor;

pub use operation_dispatcher::*;
pub use operation_executor::*;
