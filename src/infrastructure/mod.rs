//! Infrastructure layer: concrete implementations of the domain repository
//! traits.

pub mod persistence;
