pub mod error;
pub mod markers;
pub mod models;
pub mod protocol;
pub mod storage;

pub use error::{Error, Result};
pub use protocol::{Reply, Request, PROTOCOL_VERSION};
