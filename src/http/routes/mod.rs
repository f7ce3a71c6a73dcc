//! Route modules

pub mod albums;
pub mod health;
