//! Wire-level data structures (DTOs) shared by the transport, the session and the catalog.

pub mod catalog;
pub mod user;

pub use catalog::*;
pub use user::*;
