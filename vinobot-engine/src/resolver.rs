//! Pairing resolver: free-text wine name to a ranked list of dishes.

use tracing::warn;
use vinobot_catalog::{CatalogError, CatalogRepository, Dish};

/// Resolves a wine-name query into dish records ordered by pairing score.
#[derive(Clone)]
pub struct PairingResolver {
    catalog: CatalogRepository,
}

impl PairingResolver {
    pub fn new(catalog: CatalogRepository) -> Self {
        Self { catalog }
    }

    /// Returns the dishes paired with wines matching the query (substring,
    /// case-insensitive), highest score first. Pairing rows whose dish id no
    /// longer resolves are skipped and logged; they never abort the result.
    /// An empty result is a normal outcome, not an error.
    pub async fn resolve(&self, wine_name: &str) -> Result<Vec<Dish>, CatalogError> {
        let hits = self.catalog.find_pairings_for_wine(wine_name).await?;

        let mut dishes = Vec::with_capacity(hits.len());
        for hit in hits {
            match self.catalog.get_dish(hit.dish_id).await? {
                Some(dish) => dishes.push(dish),
                None => {
                    warn!(
                        dish_id = hit.dish_id,
                        wine_query = %wine_name,
                        "Pairing references a dish missing from the catalog, skipping"
                    );
                }
            }
        }
        Ok(dishes)
    }
}
