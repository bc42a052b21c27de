pub mod credential;
pub mod verified_identity;

pub use credential::*;
pub use verified_identity::*;
