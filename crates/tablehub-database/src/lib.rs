//! # tablehub-database
//!
//! Storage layer for TableHub: the [`BookingStore`] and [`SettingsStore`]
//! traits the availability engine reads through, PostgreSQL repositories
//! implementing them with sqlx, in-memory implementations for single-node
//! and test use, and a [`StoreProvider`] that picks the backend from
//! configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::StoreProvider;
pub use store::{BookingStore, SettingsStore};
