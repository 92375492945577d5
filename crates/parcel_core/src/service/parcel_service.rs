//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide use-case entry points (register, advance, re-address, cancel).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository preconditions.
//! - Service layer remains storage-agnostic.

use crate::model::parcel::{self, ClientId, Parcel, ParcelNumber};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use log::info;

/// Use-case service wrapper for parcel operations.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` and returns it with its number set.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.repo.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Gets one parcel by number.
    pub fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    /// Lists all parcels of one client.
    pub fn parcels_of(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.repo.get_by_client(client)
    }

    /// Moves a parcel one step along `registered -> sent -> delivered`.
    ///
    /// Returns the new status, or `None` when the parcel has no next status.
    /// The read and the write are separate statements.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<String>> {
        let current = self.repo.get(number)?;
        let Some(next) = parcel::next_status(&current.status) else {
            return Ok(None);
        };

        self.repo.set_status(number, next)?;
        info!(
            "event=parcel_status module=service status=ok number={} from={} to={}",
            number, current.status, next
        );
        Ok(Some(next.to_string()))
    }

    /// Changes the delivery address of a registered parcel.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)
    }

    /// Deletes a registered parcel.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.delete(number)
    }
}
