//! Bike catalog: brand → model → size → frame geometry.
//!
//! Loaded from JSON and structurally validated before anything reaches the
//! engine. The engine itself assumes validated geometry, so this is the layer
//! that fails loudly: a malformed document, an empty catalog, or a non-finite
//! number is a typed error here, never a NaN downstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bike::BikeGeometry;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no bikes")]
    Empty,
    #[error("{brand} {model} {size}: {field} is not finite")]
    NonFinite {
        brand: String,
        model: String,
        size: String,
        field: &'static str,
    },
    #[error("unknown bike: {brand} {model} {size}")]
    UnknownBike {
        brand: String,
        model: String,
        size: String,
    },
}

pub type SizeMap = BTreeMap<String, BikeGeometry>;
pub type ModelMap = BTreeMap<String, SizeMap>;

/// The full catalog, keyed brand → model → size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BikeCatalog {
    brands: BTreeMap<String, ModelMap>,
}

impl BikeCatalog {
    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        log::info!(
            "catalog loaded: {} brands, {} bikes",
            catalog.brands.len(),
            catalog.iter().count()
        );
        Ok(catalog)
    }

    /// Structural validation: at least one bike, every number finite
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut any = false;
        for (brand, model, size, geometry) in self.iter() {
            any = true;
            for (field, value) in geometry.named_fields() {
                if !value.is_finite() {
                    return Err(CatalogError::NonFinite {
                        brand: brand.to_string(),
                        model: model.to_string(),
                        size: size.to_string(),
                        field,
                    });
                }
            }
        }
        if !any {
            return Err(CatalogError::Empty);
        }
        Ok(())
    }

    pub fn geometry(
        &self,
        brand: &str,
        model: &str,
        size: &str,
    ) -> Result<&BikeGeometry, CatalogError> {
        self.brands
            .get(brand)
            .and_then(|models| models.get(model))
            .and_then(|sizes| sizes.get(size))
            .ok_or_else(|| CatalogError::UnknownBike {
                brand: brand.to_string(),
                model: model.to_string(),
                size: size.to_string(),
            })
    }

    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn models(&self, brand: &str) -> impl Iterator<Item = &str> {
        self.brands
            .get(brand)
            .into_iter()
            .flat_map(|models| models.keys().map(String::as_str))
    }

    pub fn sizes(&self, brand: &str, model: &str) -> impl Iterator<Item = &str> {
        self.brands
            .get(brand)
            .and_then(|models| models.get(model))
            .into_iter()
            .flat_map(|sizes| sizes.keys().map(String::as_str))
    }

    /// Every (brand, model, size, geometry) entry in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str, &BikeGeometry)> {
        self.brands.iter().flat_map(|(brand, models)| {
            models.iter().flat_map(move |(model, sizes)| {
                sizes
                    .iter()
                    .map(move |(size, geo)| (brand.as_str(), model.as_str(), size.as_str(), geo))
            })
        })
    }
}
