pub use crate::api::*;
pub use crate::dispatch::*;
pub use crate::listener::*;
pub use crate::outcome::*;
pub use crate::relay_error::*;

pub(crate) use std::marker::PhantomData;
pub(crate) use std::sync::{Arc, Mutex};

pub(crate) use tokio::sync::oneshot::{channel, Sender};
pub(crate) use tracing::{debug, warn};
