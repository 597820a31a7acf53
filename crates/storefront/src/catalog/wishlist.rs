//! Wishlist membership keyed by product ID.

use viorra_core::ProductId;

use super::types::Product;

/// The live wishlist for one catalog session.
///
/// Entries keep insertion order and are unique by [`ProductId`].
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Remove the product if an entry with its ID exists, otherwise append it.
    ///
    /// Returns the new membership state.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if let Some(pos) = self.position(product.id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    /// Whether a product with this ID is on the wishlist.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Owned copy of the current entries.
    #[must_use]
    pub fn snapshot(&self) -> WishlistSnapshot {
        WishlistSnapshot(self.items.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}

/// A point-in-time copy of the wishlist, handed to the Wishlist view.
///
/// Later changes to the live [`Wishlist`] never show up here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistSnapshot(Vec<Product>);

impl WishlistSnapshot {
    /// Products in the order they were added.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an entry by ID, e.g. to open its detail view.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.0.iter().find(|p| p.id == id)
    }
}

impl IntoIterator for WishlistSnapshot {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WishlistSnapshot {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "price": 1.0,
        }))
        .unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let lipstick = product(3, "Red Lipstick");

        assert!(wishlist.toggle(&lipstick));
        assert!(wishlist.contains(lipstick.id));
        assert!(!wishlist.toggle(&lipstick));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_removal_is_by_id_not_value() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&product(3, "Red Lipstick"));

        // Same ID from a refetch with a changed title still removes the entry
        assert!(!wishlist.toggle(&product(3, "Red Lipstick (new)")));
        assert!(!wishlist.contains(ProductId::new(3)));
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut wishlist = Wishlist::new();
        for (id, title) in [(5, "e"), (1, "a"), (3, "c")] {
            wishlist.toggle(&product(id, title));
        }
        wishlist.toggle(&product(1, "a"));

        let ids: Vec<u64> = wishlist.snapshot().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&product(1, "a"));
        let before = wishlist.snapshot();

        wishlist.toggle(&product(2, "b"));
        wishlist.toggle(&product(1, "a"));

        assert_eq!(before.len(), 1);
        assert!(before.get(ProductId::new(1)).is_some());
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(ProductId::new(2)));
    }
}
