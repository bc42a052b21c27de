pub mod stream_claims;

pub use stream_claims::*;
