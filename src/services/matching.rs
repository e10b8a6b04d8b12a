use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::geo::distance;
use super::store::{ProviderStore, StoreError};
use crate::models::{Address, FloorMaterial, MaterialFilter, Provider};

/// Matches customer requests against the provider store.
///
/// The service holds no state of its own besides the store handle, so
/// concurrent calls never coordinate.
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<dyn ProviderStore>,
}

impl MatchingService {
    pub fn new(store: Arc<dyn ProviderStore>) -> Self {
        Self { store }
    }

    /// Finds providers that support `material` and whose service radius covers
    /// `location`, best rated first.
    ///
    /// # Errors
    ///
    /// Store errors are returned unchanged. No matches is an empty vector.
    #[instrument(skip(self), err)]
    pub async fn find_providers(
        &self,
        material: FloorMaterial,
        location: Address,
    ) -> Result<Vec<Provider>, StoreError> {
        self.find(MaterialFilter::Only(material), location).await
    }

    /// Same as [`find_providers`](Self::find_providers) without the capability
    /// check, so providers with no declared material are included too.
    #[instrument(skip(self), err)]
    pub async fn find_providers_unfiltered(
        &self,
        location: Address,
    ) -> Result<Vec<Provider>, StoreError> {
        self.find(MaterialFilter::Any, location).await
    }

    async fn find(
        &self,
        filter: MaterialFilter,
        location: Address,
    ) -> Result<Vec<Provider>, StoreError> {
        let candidates = self.store.list_by_material(filter).await?;
        let candidate_count = candidates.len();

        let matched = Self::rank(
            candidates
                .into_iter()
                .filter(|provider| filter.admits(provider))
                .filter(|provider| Self::is_in_range(provider, location))
                .collect(),
        );

        debug!(
            candidate_count,
            matched_count = matched.len(),
            "Provider matching finished"
        );
        Ok(matched)
    }

    /// Returns true if `location` lies strictly inside the provider's radius.
    ///
    /// A distance equal to the radius is out of range, so a zero radius never
    /// matches.
    #[inline]
    pub fn is_in_range(provider: &Provider, location: Address) -> bool {
        let d = distance(location, provider.address);
        trace!(provider_id = provider.id, distance = d, radius = provider.radius);
        d < provider.radius
    }

    /// Sorts by rating descending, then by id ascending.
    ///
    /// A NaN rating ranks below every real rating.
    pub fn rank(mut providers: Vec<Provider>) -> Vec<Provider> {
        providers.sort_by(Self::compare);
        providers
    }

    fn compare(a: &Provider, b: &Provider) -> Ordering {
        a.rating
            .is_nan()
            .cmp(&b.rating.is_nan())
            .then_with(|| b.rating.total_cmp(&a.rating))
            .then_with(|| a.id.cmp(&b.id))
    }
}
