//! Flat-file product reference data, loaded once at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::models::{Product, ProductFeatures};

/// Product reference table: name, brand, and canonical link per product
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Loads the catalog from its JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read product catalog from {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid product catalog at {}", path.display()))?;
        tracing::info!(count = products.len(), path = %path.display(), "Product catalog loaded");
        Ok(Self { products })
    }

    /// Builds a catalog from in-memory records
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Case-insensitive lookup by product and brand name, first match wins
    pub fn find(&self, product_name: &str, brand_name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.matches(product_name, brand_name))
    }
}

/// Encoded product feature table keyed by the label-encoded link
#[derive(Debug, Clone)]
pub struct FeatureTable {
    rows: HashMap<i64, ProductFeatures>,
}

impl FeatureTable {
    /// Loads the table from its JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read feature table from {}", path.display()))?;
        let rows: Vec<ProductFeatures> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid feature table at {}", path.display()))?;
        tracing::info!(count = rows.len(), path = %path.display(), "Product feature table loaded");
        Ok(Self::from_rows(rows))
    }

    /// Builds a table from in-memory rows; a duplicate link code keeps the
    /// last row, matching a left-join against a deduplicated key column
    pub fn from_rows(rows: Vec<ProductFeatures>) -> Self {
        let rows = rows.into_iter().map(|row| (row.link_code, row)).collect();
        Self { rows }
    }

    /// Looks up the trained feature row for an encoded link
    pub fn find(&self, link_code: i64) -> Option<&ProductFeatures> {
        self.rows.get(&link_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                name: "Hydra Boost Gel".to_string(),
                brand: "Neutrogena".to_string(),
                link: "https://example.com/hydra-boost".to_string(),
            },
            Product {
                name: "Foaming Cleanser".to_string(),
                brand: "CeraVe".to_string(),
                link: "https://example.com/foaming-cleanser".to_string(),
            },
        ]
    }

    #[test]
    fn test_catalog_find_case_insensitive() {
        let catalog = ProductCatalog::from_products(sample_products());
        let product = catalog.find("hydra boost gel", "neutrogena").unwrap();
        assert_eq!(product.link, "https://example.com/hydra-boost");
    }

    #[test]
    fn test_catalog_find_requires_both_fields() {
        let catalog = ProductCatalog::from_products(sample_products());
        assert!(catalog.find("Hydra Boost Gel", "CeraVe").is_none());
        assert!(catalog.find("Unknown", "Neutrogena").is_none());
    }

    #[test]
    fn test_feature_table_lookup_by_link_code() {
        let row = ProductFeatures {
            link: "https://example.com/hydra-boost".to_string(),
            normal: 1.0,
            dry: 1.0,
            oily: 0.0,
            combination: 0.0,
            dryness: 1.0,
            dullness: 0.0,
            oiliness: 0.0,
            acne: 0.0,
            aging: 0.0,
            pores: 0.0,
            uneven_texture: 0.0,
            uneven_skin_tone: 0.0,
            redness: 0.0,
            dark_spots: 0.0,
            no_fragrance: 1.0,
            yes_fragrance: 0.0,
            sensitive_skin_no: 0.0,
            sensitive_skin_yes: 1.0,
            link_code: 3,
        };
        let table = FeatureTable::from_rows(vec![row.clone()]);
        assert_eq!(table.find(3), Some(&row));
        assert!(table.find(4).is_none());
    }
}
