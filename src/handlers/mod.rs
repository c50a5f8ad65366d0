//! HTTP handlers.

pub mod demo;
pub mod person;
