//! Domain model for parcel tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by core persistence and services.
//!
//! # Invariants
//! - Every parcel is identified by a store-assigned `ParcelNumber`.
//! - Deletion is a hard delete, permitted only for registered parcels.

pub mod parcel;
