//! Wire messages exchanged with the SFU over the signaling socket and the
//! `SignalServer` RPC endpoint.

#[allow(clippy::all)]
pub mod sfu {
    include!("stream.video.sfu.rs");
}

pub use prost::Message;
