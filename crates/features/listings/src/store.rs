//! In-memory listing catalog.
//!
//! The catalog is a keyed map behind a read-write lock; queries clone the
//! matching records out so callers never hold the lock across I/O.

use fxhash::FxHashMap;
use parking_lot::RwLock;
use phub_domain::listing::{ListingPurpose, PropertyListing, PropertyType};
use std::sync::Arc;

/// Catalog query filter, mirroring the public listing API parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub purpose: Option<ListingPurpose>,
    pub property_type: Option<PropertyType>,
    pub state: Option<String>,
    pub district: Option<String>,
}

impl ListingFilter {
    fn matches(&self, listing: &PropertyListing) -> bool {
        if self.purpose.is_some_and(|purpose| purpose != listing.listing_purpose) {
            return false;
        }
        if self.property_type.is_some_and(|kind| kind != listing.property_type) {
            return false;
        }
        if let Some(state) = &self.state {
            if listing.state.as_deref() != Some(state.as_str()) {
                return false;
            }
        }
        if let Some(district) = &self.district {
            if listing.district.as_deref() != Some(district.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Shared, thread-safe listing store.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    entries: Arc<RwLock<FxHashMap<String, PropertyListing>>>,
}

impl ListingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a listing under its id. Returns the previous
    /// record when one existed.
    pub fn insert(&self, listing: PropertyListing) -> Option<PropertyListing> {
        self.entries.write().insert(listing.id.clone(), listing)
    }

    /// Fetches a listing by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<PropertyListing> {
        self.entries.read().get(id).cloned()
    }

    /// Active listings matching the filter, newest first, capped at `limit`.
    #[must_use]
    pub fn query(&self, filter: &ListingFilter, limit: usize) -> Vec<PropertyListing> {
        let entries = self.entries.read();
        let mut matched: Vec<PropertyListing> = entries
            .values()
            .filter(|listing| listing.is_active && filter.matches(listing))
            .cloned()
            .collect();
        drop(entries);

        // Newest first; ids break ties so paging stays stable.
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        matched.truncate(limit);
        matched
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
