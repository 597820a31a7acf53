//! Screen routes and the navigation stack.
//!
//! Payload-carrying routes own their data: a detail route holds its own copy
//! of the product and the wishlist route holds a snapshot.

use core::fmt;

use crate::catalog::{Product, WishlistSnapshot};

/// A destination screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Welcome,
    Login,
    Register,
    /// The product list.
    Product,
    ProductDetail(Box<Product>),
    Wishlist(WishlistSnapshot),
    Profile,
}

impl Route {
    /// Screen name, without payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Product => "Product",
            Self::ProductDetail(_) => "ProductDetail",
            Self::Wishlist(_) => "Wishlist",
            Self::Profile => "Profile",
        }
    }

    /// Detail route for `product`.
    #[must_use]
    pub fn product_detail(product: &Product) -> Self {
        Self::ProductDetail(Box::new(product.clone()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of visited routes. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the welcome screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Welcome],
        }
    }

    /// The visible route.
    #[must_use]
    pub fn current(&self) -> &Route {
        // The stack is never empty; Welcome is the fallback for safety
        self.stack.last().unwrap_or(&Route::Welcome)
    }

    /// Push `route` on top of the stack.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.current(), to = %route, "Navigate");
        self.stack.push(route);
    }

    /// Pop the top route. Returns `false` when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with `route`.
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(to = %route, "Reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Number of routes on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use viorra_core::ProductId;

    use super::*;
    use crate::catalog::Wishlist;

    fn product(id: u64) -> Product {
        serde_json::from_value(serde_json::json!({"id": id, "title": "Item", "price": 2.5})).unwrap()
    }

    #[test]
    fn test_starts_at_welcome() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::Welcome);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Login);
        nav.navigate(Route::Product);
        assert_eq!(nav.current().name(), "Product");

        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::Login);
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.current(), &Route::Welcome);
    }

    #[test]
    fn test_reset() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Product);
        nav.navigate(Route::Profile);
        nav.reset(Route::Welcome);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Route::Welcome);
    }

    #[test]
    fn test_payloads_are_owned_copies() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&product(1));

        let mut nav = Navigator::new();
        nav.navigate(Route::Wishlist(wishlist.snapshot()));
        wishlist.toggle(&product(2));

        let Route::Wishlist(snapshot) = nav.current() else {
            panic!("expected wishlist route");
        };
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get(ProductId::new(2)).is_none());

        nav.navigate(Route::product_detail(&product(9)));
        assert_eq!(nav.current().to_string(), "ProductDetail");
    }
}
