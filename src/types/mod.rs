//! Shared response types.

mod response;

pub use response::{Ack, Welcome};
