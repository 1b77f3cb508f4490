//! Product listing view rendering.
//!
//! Handlebars-based renderer for the HTML product listing returned by
//! the listing, sort, and filter endpoints.

use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;

const LISTING_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Inventory</title>
</head>
<body>
  <h1>Products</h1>
  <table border="1">
    <tr><th>Name</th><th>Price</th><th>Description</th><th>Quantity</th><th>Unit</th></tr>
    {{#each products}}
    <tr>
      <td>{{name}}</td>
      <td>{{price}}</td>
      <td>{{description}}</td>
      <td>{{quantity}}</td>
      <td>{{unit}}</td>
    </tr>
    {{/each}}
  </table>

  <h2>Add product</h2>
  <form action="/products" method="POST">
    <input name="name" placeholder="name" required>
    <input name="price" placeholder="price" required>
    <input name="description" placeholder="description">
    <input name="quantity" placeholder="quantity" required>
    <input name="unit" placeholder="unit">
    <button type="submit">Add</button>
  </form>

  <h2>Sort</h2>
  <form action="/sortP" method="POST">
    <select name="sortBy">
      <option value="name">name</option>
      <option value="price">price</option>
      <option value="quantity">quantity</option>
    </select>
    <button type="submit">Sort</button>
  </form>

  <h2>Filter by price</h2>
  <form action="/filterByPrice" method="POST">
    <input name="maxPrice" placeholder="max price">
    <button type="submit">Filter</button>
  </form>
</body>
</html>
"#;

/// Data handed to the listing template.
#[derive(Serialize)]
struct ListingData<'a> {
    products: &'a [Product],
}

/// Renders the product listing page.
#[derive(Clone)]
pub struct ListingView {
    handlebars: Arc<Handlebars<'static>>,
}

impl ListingView {
    /// Create a view with the listing template registered.
    pub fn new() -> InventoryResult<Self> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string("listing", LISTING_TEMPLATE)
            .map_err(|e| InventoryError::Render(format!("Failed to register listing: {}", e)))?;

        Ok(Self {
            handlebars: Arc::new(handlebars),
        })
    }

    /// Render the listing for the given products.
    pub fn render(&self, products: &[Product]) -> InventoryResult<String> {
        debug!(count = products.len(), "Rendering product listing");

        self.handlebars
            .render("listing", &ListingData { products })
            .map_err(|e| InventoryError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductFields;

    fn product(name: &str) -> Product {
        Product::new(ProductFields {
            name: name.to_string(),
            price: 2.5,
            description: Some("fresh".to_string()),
            quantity: 4,
            unit: Some("kg".to_string()),
        })
    }

    #[test]
    fn test_render_lists_every_product() {
        let view = ListingView::new().unwrap();
        let page = view
            .render(&[product("Apples"), product("Pears")])
            .unwrap();

        assert!(page.contains("Apples"));
        assert!(page.contains("Pears"));
        assert!(page.contains("2.5"));
    }

    #[test]
    fn test_render_empty_listing_still_produces_page() {
        let view = ListingView::new().unwrap();
        let page = view.render(&[]).unwrap();

        assert!(page.contains("<h1>Products</h1>"));
    }

    #[test]
    fn test_render_escapes_html_in_names() {
        let view = ListingView::new().unwrap();
        let page = view.render(&[product("<script>alert(1)</script>")]).unwrap();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
