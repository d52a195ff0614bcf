#[macro_use]
extern crate serde;

pub mod algorithm;
pub mod auth;
pub mod authorization;
pub mod config;
pub mod constant;
pub mod error;
pub mod signer;
pub mod string_to_sign;

pub use algorithm::*;
pub use auth::*;
pub use authorization::*;
pub use config::*;
pub use constant::*;
pub use error::*;
pub use signer::*;
pub use string_to_sign::*;
