//! HTTP handlers for the pharmacist service.

pub mod app;
pub mod ask;
