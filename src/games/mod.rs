//! Game rule implementations.

pub mod lasker;
