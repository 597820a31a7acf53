//! Catalog commands: product list and product detail.
//!
//! # Usage
//!
//! ```bash
//! viorra products
//! viorra products --search phone
//! viorra products --wish 121 --wish 130
//! viorra product 121
//! ```

use viorra_core::ProductId;
use viorra_storefront::catalog::{CatalogIndex, Product};
use viorra_storefront::error::AppError;
use viorra_storefront::navigation::{Navigator, Route};
use viorra_storefront::state::AppState;

/// Print every product whose title contains `search`, then the wishlist
/// built by toggling each ID in `wish` in order.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog cannot be fetched and
/// `AppError::NotFound` if a wishlist ID is not in the catalog.
#[allow(clippy::print_stdout)]
pub async fn list(state: &AppState, search: &str, wish: &[ProductId]) -> Result<(), AppError> {
    let mut index = CatalogIndex::new();
    index.load(state.catalog()).await?;
    index.set_search_term(search);

    for &id in wish {
        let product = index
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No product with ID {id}")))?;
        index.toggle_wishlist(&product);
    }

    for product in index.filtered() {
        println!("{:>5}  {:<50} {}", product.id, product.title, product.price);
    }
    println!(
        "\n{} of {} products",
        index.filtered_count(),
        index.total_count()
    );

    if !wish.is_empty() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Product);
        nav.navigate(Route::Wishlist(index.wishlist_snapshot()));
        if let Route::Wishlist(snapshot) = nav.current() {
            print_wishlist(snapshot.iter());
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_wishlist<'a>(products: impl ExactSizeIterator<Item = &'a Product>) {
    println!("\nWishlist ({})", products.len());
    for product in products {
        println!("{:>5}  {:<50} {}", product.id, product.title, product.price);
    }
}

/// Print the detail view for one product.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog cannot be fetched and
/// `AppError::NotFound` if no product has this ID.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState, id: ProductId) -> Result<(), AppError> {
    let mut index = CatalogIndex::new();
    index.load(state.catalog()).await?;
    let product = index
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("No product with ID {id}")))?;

    println!("{}", product.title);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }
    println!();
    println!("{}  {}", product.rating.star_row(), product.rating);
    if let Some(brand) = &product.brand {
        println!("Brand: {brand}");
    }
    println!(
        "Price: {}  ({:.2}% off)",
        product.price, product.discount_percentage
    );

    let d = product.dimensions;
    println!("Dimensions: {} x {} x {}", d.width, d.height, d.depth);
    if !product.warranty_information.is_empty() {
        println!("Warranty: {}", product.warranty_information);
    }
    if !product.shipping_information.is_empty() {
        println!("Shipping: {}", product.shipping_information);
    }

    if !product.reviews.is_empty() {
        println!("\nReviews");
        for review in &product.reviews {
            let stars = review.rating.map_or_else(String::new, |r| format!(" ({r}/5)"));
            println!("- {}{stars}: {}", review.reviewer_name, review.comment);
        }
    }
    Ok(())
}
