//! Members domain module.

pub mod address;
pub mod member;

pub use address::Address;
pub use member::Member;
