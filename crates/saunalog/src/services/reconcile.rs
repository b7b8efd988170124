//! Lazy sauna materialisation.
//!
//! A sauna row is created the first time something references its place id.
//! The provider is only consulted on a local miss, and the outbound call is
//! made before any write so no store lock is held across it.

use saunalog_core::places::PlaceResolver;
use saunalog_core::sauna::{validate_place_id, Sauna};
use saunalog_core::storage::SaunaRepository;

use super::ServiceError;

/// Ensures a sauna exists locally, fetching it from the provider on a miss.
pub struct SaunaReconciler<'a> {
    saunas: &'a dyn SaunaRepository,
    places: &'a dyn PlaceResolver,
}

impl<'a> SaunaReconciler<'a> {
    pub fn new(saunas: &'a dyn SaunaRepository, places: &'a dyn PlaceResolver) -> Self {
        Self { saunas, places }
    }

    /// Returns the persisted sauna for `sauna_id`, creating it if needed.
    ///
    /// Repeated calls return the same row and resolve against the provider
    /// at most once. A concurrent insert of the same id is absorbed by
    /// re-reading the winner's row.
    pub async fn ensure_sauna(&self, sauna_id: &str) -> Result<Sauna, ServiceError> {
        validate_place_id(sauna_id)?;

        if let Some(sauna) = self.saunas.get_sauna(sauna_id).await? {
            tracing::trace!(sauna_id, "Sauna cache hit");
            return Ok(sauna);
        }

        tracing::debug!(sauna_id, "Sauna cache miss, resolving with provider");
        let record = self
            .places
            .resolve(sauna_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sauna", sauna_id))?;

        // Rows are keyed by the id callers reference, even if the provider
        // reports a different canonical one.
        let mut sauna = Sauna::from(record);
        sauna.id = sauna_id.to_string();

        match self.saunas.create_sauna(&sauna).await {
            Ok(()) => {
                tracing::info!(sauna_id, name = %sauna.name, "Sauna created from provider record");
                Ok(sauna)
            }
            Err(error) if error.is_already_exists() => {
                tracing::warn!(sauna_id, "Sauna inserted concurrently, re-reading");
                match self.saunas.get_sauna(sauna_id).await? {
                    Some(existing) => Ok(existing),
                    None => Err(error.into()),
                }
            }
            Err(error) => Err(error.into()),
        }
    }
}
