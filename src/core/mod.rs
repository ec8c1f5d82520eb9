//! Core business logic layer
//!
//! Data model, persistence adapter, repository, filter engine and the
//! application state a front end renders from.

pub mod app;
pub mod data;
pub mod filter;
pub mod repository;
pub mod store;
pub mod traits;
