//! Integration tests for browsing: load, search, wishlist and navigation.
//!
//! The catalog is served by a fixture source shaped like the live
//! products endpoint, so these tests never touch the network.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::atomic::{AtomicUsize, Ordering};

use viorra_core::{ProductId, Star};
use viorra_storefront::catalog::{
    CatalogIndex, FetchError, Product, ProductSource, ProductsResponse,
};
use viorra_storefront::navigation::{Navigator, Route};

const CATALOG: &str = r#"{
    "products": [
        {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99, "rating": 2.56,
         "brand": "Essence", "category": "beauty", "stock": 99,
         "dimensions": {"width": 15.14, "height": 13.08, "depth": 22.99},
         "warrantyInformation": "1 week warranty",
         "shippingInformation": "Ships in 3-5 business days",
         "reviews": [{"rating": 3, "comment": "Would not recommend!", "reviewerName": "Eleanor Collins",
                      "reviewerEmail": "eleanor.collins@x.dummyjson.com", "date": "2025-04-30T09:41:02.053Z"}]},
        {"id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99, "rating": 2.86},
        {"id": 121, "title": "iPhone 5s", "price": 199.99, "rating": 2.83, "brand": "Apple"},
        {"id": 122, "title": "iPhone 6", "price": 299.99, "rating": 3.41, "brand": "Apple"},
        {"id": 130, "title": "Smartphone Stand", "price": 14.99, "rating": 4.5}
    ],
    "total": 5, "skip": 0, "limit": 0
}"#;

/// Serves the fixture catalog and counts fetches.
#[derive(Default)]
struct FixtureCatalog {
    fetches: AtomicUsize,
}

impl ProductSource for FixtureCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let response: ProductsResponse = serde_json::from_str(CATALOG)?;
        Ok(response.products)
    }
}

struct Offline;

impl ProductSource for Offline {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        Err(FetchError::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        })
    }
}

async fn loaded() -> CatalogIndex {
    let mut index = CatalogIndex::new();
    index.load(&FixtureCatalog::default()).await.unwrap();
    index
}

fn titles(index: &CatalogIndex) -> Vec<&str> {
    index.filtered().map(|p| p.title.as_str()).collect()
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn test_load_keeps_catalog_order() {
    let index = loaded().await;
    let ids: Vec<u64> = index.all().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 121, 122, 130]);
    assert_eq!(index.filtered_count(), 5);
}

#[tokio::test]
async fn test_failed_reload_keeps_products_and_search() {
    let mut index = loaded().await;
    index.set_search_term("iphone");

    assert!(index.load(&Offline).await.is_err());
    assert_eq!(index.total_count(), 5);
    assert_eq!(index.search_term(), "iphone");
    assert_eq!(titles(&index), vec!["iPhone 5s", "iPhone 6"]);
}

#[tokio::test]
async fn test_reload_clears_search() {
    let source = FixtureCatalog::default();
    let mut index = CatalogIndex::new();
    index.load(&source).await.unwrap();
    index.set_search_term("mirror");
    assert_eq!(index.filtered_count(), 1);

    index.load(&source).await.unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    assert_eq!(index.search_term(), "");
    assert_eq!(index.filtered_count(), 5);
}

#[tokio::test]
async fn test_overlapping_loads_latest_wins() {
    let source = FixtureCatalog::default();
    let mut index = CatalogIndex::new();

    let first = index.begin_load();
    let second = index.begin_load();

    let fresh = source.fetch_products().await.unwrap();
    let stale = fresh[..2].to_vec();

    assert!(index.finish_load(second, Ok(fresh)).unwrap());
    assert!(!index.finish_load(first, Ok(stale)).unwrap());
    assert_eq!(index.total_count(), 5);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_is_case_insensitive_title_match() {
    let mut index = loaded().await;

    index.set_search_term("PHONE");
    assert_eq!(
        titles(&index),
        vec!["iPhone 5s", "iPhone 6", "Smartphone Stand"]
    );

    // Brand is not searched
    index.set_search_term("apple");
    assert_eq!(index.filtered_count(), 0);

    index.set_search_term("");
    assert_eq!(index.filtered_count(), index.total_count());
}

// =============================================================================
// Wishlist and navigation
// =============================================================================

#[tokio::test]
async fn test_wishlist_snapshot_travels_with_route() {
    let mut index = loaded().await;
    let mut nav = Navigator::new();
    nav.navigate(Route::Product);

    let phone = index.get(ProductId::new(121)).unwrap().clone();
    let stand = index.get(ProductId::new(130)).unwrap().clone();
    assert!(index.toggle_wishlist(&phone));
    assert!(index.toggle_wishlist(&stand));

    nav.navigate(Route::Wishlist(index.wishlist_snapshot()));

    // Changes after navigating are not seen by the open view
    assert!(!index.toggle_wishlist(&phone));
    assert!(!index.is_wishlisted(phone.id));

    let Route::Wishlist(snapshot) = nav.current() else {
        panic!("expected wishlist route, got {}", nav.current());
    };
    let ids: Vec<ProductId> = snapshot.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![phone.id, stand.id]);
    assert_eq!(index.wishlist_snapshot().len(), 1);

    assert!(nav.go_back());
    assert_eq!(nav.current(), &Route::Product);
}

#[tokio::test]
async fn test_detail_route_carries_full_product() {
    let index = loaded().await;
    let mascara = index.get(ProductId::new(1)).unwrap();

    let mut nav = Navigator::new();
    nav.navigate(Route::product_detail(mascara));

    let product = match nav.current() {
        Route::ProductDetail(product) => product,
        other => panic!("expected detail route, got {other}"),
    };
    assert_eq!(product.price.to_string(), "$9.99");
    assert_eq!(product.brand_name(), "Essence");
    assert_eq!(product.warranty_information, "1 week warranty");
    assert_eq!(product.reviews[0].reviewer_name, "Eleanor Collins");
    assert_eq!(
        product.rating.stars(),
        [Star::Full, Star::Full, Star::Half, Star::Empty, Star::Empty]
    );
}
