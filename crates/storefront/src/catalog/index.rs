//! In-memory catalog state for one product-list session.

use tracing::{debug, instrument, warn};

use viorra_core::ProductId;

use super::types::Product;
use super::wishlist::{Wishlist, WishlistSnapshot};
use super::{FetchError, ProductSource};

/// Proof that a load was started; pass it back to [`CatalogIndex::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[must_use = "a load ticket must be passed to finish_load"]
pub struct LoadTicket(u64);

/// Fetched products, the search-derived view and the wishlist.
///
/// `filtered` always holds exactly the positions in `all` whose title
/// contains the search term (case-insensitive), or every position when the
/// term is empty.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    all: Vec<Product>,
    search_term: String,
    filtered: Vec<usize>,
    wishlist: Wishlist,
    issued: u64,
    applied: u64,
}

impl CatalogIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch the full catalog and replace the current list.
    ///
    /// On success the search term is cleared and the filtered view equals
    /// the new list. On failure nothing changes. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns the source's `FetchError` unchanged.
    #[instrument(skip_all)]
    pub async fn load<S: ProductSource>(&mut self, source: &S) -> Result<&[Product], FetchError> {
        let ticket = self.begin_load();
        let result = source.fetch_products().await;
        self.finish_load(ticket, result)?;
        Ok(&self.all)
    }

    /// Start a load whose fetch runs outside this index.
    ///
    /// The index stays fully usable until [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Apply the result of a fetch started with [`begin_load`](Self::begin_load).
    ///
    /// A successful result is applied only if no newer load has already been
    /// applied, so the most recently started load wins regardless of the
    /// order responses arrive in. Returns whether the result was applied.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; prior state is left untouched.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> Result<bool, FetchError> {
        let products = result.inspect_err(|e| {
            warn!(error = %e, ticket = ticket.0, "Catalog load failed; keeping previous products");
        })?;

        if ticket.0 <= self.applied {
            debug!(
                ticket = ticket.0,
                applied = self.applied,
                "Discarding response from superseded catalog load"
            );
            return Ok(false);
        }

        self.applied = ticket.0;
        self.all = products;
        self.search_term.clear();
        self.filtered = (0..self.all.len()).collect();
        debug!(count = self.all.len(), "Catalog replaced");
        Ok(true)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Store a new search term and recompute the filtered view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Products matching the search term, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filtered.iter().filter_map(|&i| self.all.get(i))
    }

    /// Every fetched product, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.all
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    /// Look up a fetched product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.all.iter().find(|p| p.id == id)
    }

    fn refilter(&mut self) {
        if self.search_term.is_empty() {
            self.filtered = (0..self.all.len()).collect();
            return;
        }

        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, p)| p.title_contains(&needle))
            .map(|(i, _)| i)
            .collect();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add or remove a product, keyed by its ID. Returns the new membership.
    pub fn toggle_wishlist(&mut self, product: &Product) -> bool {
        let added = self.wishlist.toggle(product);
        debug!(product_id = %product.id, added, "Wishlist toggled");
        added
    }

    #[must_use]
    pub fn is_wishlisted(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Copy of the wishlist for the Wishlist view.
    #[must_use]
    pub fn wishlist_snapshot(&self) -> WishlistSnapshot {
        self.wishlist.snapshot()
    }
}
