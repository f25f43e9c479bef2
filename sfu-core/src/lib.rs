pub use sfu_proto as proto;

pub mod decoder;
pub mod error;
pub mod net;
pub mod requests;
pub mod types;
