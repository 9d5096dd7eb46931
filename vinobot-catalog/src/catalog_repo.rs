//! Catalog repository: wines, dishes, and pairing scores in SQLite.
//!
//! Creates the schema on construction and exposes the lookups the engine
//! needs: by-type and by-name-substring wine searches, full listings, dish
//! resolution by id, and score-ordered pairing retrieval. Name searches use
//! SQL `LIKE` with the input embedded as a substring pattern.

use crate::error::CatalogError;
use crate::models::{Dish, DishCategory, PairingHit, Wine, WineType};
use crate::sqlite_pool::CatalogPool;
use tracing::info;

#[derive(Clone)]
pub struct CatalogRepository {
    pool_manager: CatalogPool,
}

/// Raw `wines` row; converted to [`Wine`] after parsing the type column.
#[derive(sqlx::FromRow)]
struct WineRow {
    id: i64,
    name: String,
    wine_type: String,
    tannins: i64,
    acidity: i64,
    region: Option<String>,
    vintage: i64,
    description: Option<String>,
}

impl TryFrom<WineRow> for Wine {
    type Error = CatalogError;

    fn try_from(row: WineRow) -> Result<Self, Self::Error> {
        Ok(Wine {
            id: row.id,
            name: row.name,
            wine_type: row.wine_type.parse::<WineType>()?,
            tannins: row.tannins,
            acidity: row.acidity,
            region: row.region,
            vintage: row.vintage,
            description: row.description,
        })
    }
}

/// Raw `dishes` row; converted to [`Dish`] after parsing the category column.
#[derive(sqlx::FromRow)]
struct DishRow {
    id: i64,
    name: String,
    category: String,
    fat_level: i64,
    protein_level: i64,
    cooking_time_minutes: i64,
    ingredients: Option<String>,
    recipe: Option<String>,
}

impl TryFrom<DishRow> for Dish {
    type Error = CatalogError;

    fn try_from(row: DishRow) -> Result<Self, Self::Error> {
        Ok(Dish {
            id: row.id,
            name: row.name,
            category: row.category.parse::<DishCategory>()?,
            fat_level: row.fat_level,
            protein_level: row.protein_level,
            cooking_time_minutes: row.cooking_time_minutes,
            ingredients: row.ingredients,
            recipe: row.recipe,
        })
    }
}

impl CatalogRepository {
    /// Opens (or creates) the catalog database and bootstraps the schema.
    pub async fn new(database_url: &str) -> Result<Self, CatalogError> {
        let pool_manager = CatalogPool::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), CatalogError> {
        info!("Creating catalog tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                wine_type TEXT NOT NULL,
                tannins INTEGER NOT NULL CHECK (tannins BETWEEN 1 AND 5),
                acidity INTEGER NOT NULL CHECK (acidity BETWEEN 1 AND 5),
                region TEXT,
                vintage INTEGER NOT NULL,
                description TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS dishes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                fat_level INTEGER NOT NULL CHECK (fat_level BETWEEN 1 AND 5),
                protein_level INTEGER NOT NULL CHECK (protein_level BETWEEN 1 AND 5),
                cooking_time_minutes INTEGER NOT NULL CHECK (cooking_time_minutes >= 0),
                ingredients TEXT,
                recipe TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pairings (
                wine_id INTEGER NOT NULL REFERENCES wines(id),
                dish_id INTEGER NOT NULL REFERENCES dishes(id),
                score INTEGER NOT NULL,
                PRIMARY KEY (wine_id, dish_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Catalog tables ready");
        Ok(())
    }

    /// Inserts a wine and returns its generated id.
    pub async fn add_wine(&self, wine: &Wine) -> Result<i64, CatalogError> {
        let result = sqlx::query(
            r#"
            INSERT INTO wines (name, wine_type, tannins, acidity, region, vintage, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&wine.name)
        .bind(wine.wine_type.as_str())
        .bind(wine.tannins)
        .bind(wine.acidity)
        .bind(&wine.region)
        .bind(wine.vintage)
        .bind(&wine.description)
        .execute(self.pool_manager.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Inserts a dish and returns its generated id.
    pub async fn add_dish(&self, dish: &Dish) -> Result<i64, CatalogError> {
        let result = sqlx::query(
            r#"
            INSERT INTO dishes (name, category, fat_level, protein_level, cooking_time_minutes, ingredients, recipe)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&dish.name)
        .bind(dish.category.as_str())
        .bind(dish.fat_level)
        .bind(dish.protein_level)
        .bind(dish.cooking_time_minutes)
        .bind(&dish.ingredients)
        .bind(&dish.recipe)
        .execute(self.pool_manager.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Records a pairing score between an existing wine and dish.
    pub async fn add_pairing(
        &self,
        wine_id: i64,
        dish_id: i64,
        score: i64,
    ) -> Result<(), CatalogError> {
        sqlx::query("INSERT INTO pairings (wine_id, dish_id, score) VALUES (?, ?, ?)")
            .bind(wine_id)
            .bind(dish_id)
            .bind(score)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(())
    }

    /// All wines of the given type.
    pub async fn find_wines_by_type(&self, wine_type: WineType) -> Result<Vec<Wine>, CatalogError> {
        let rows: Vec<WineRow> = sqlx::query_as("SELECT * FROM wines WHERE wine_type = ?")
            .bind(wine_type.as_str())
            .fetch_all(self.pool_manager.pool())
            .await?;
        rows.into_iter().map(Wine::try_from).collect()
    }

    /// Wines whose name contains the given text (case-insensitive substring).
    pub async fn find_wines_by_name(&self, name: &str) -> Result<Vec<Wine>, CatalogError> {
        let rows: Vec<WineRow> = sqlx::query_as("SELECT * FROM wines WHERE name LIKE ?")
            .bind(format!("%{}%", name))
            .fetch_all(self.pool_manager.pool())
            .await?;
        rows.into_iter().map(Wine::try_from).collect()
    }

    /// All wines in the catalog.
    pub async fn list_wines(&self) -> Result<Vec<Wine>, CatalogError> {
        let rows: Vec<WineRow> = sqlx::query_as("SELECT * FROM wines ORDER BY id")
            .fetch_all(self.pool_manager.pool())
            .await?;
        rows.into_iter().map(Wine::try_from).collect()
    }

    /// All dishes in the catalog.
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, CatalogError> {
        let rows: Vec<DishRow> = sqlx::query_as("SELECT * FROM dishes ORDER BY id")
            .fetch_all(self.pool_manager.pool())
            .await?;
        rows.into_iter().map(Dish::try_from).collect()
    }

    /// One dish by id, or None when the id is unknown.
    pub async fn get_dish(&self, id: i64) -> Result<Option<Dish>, CatalogError> {
        let row: Option<DishRow> = sqlx::query_as("SELECT * FROM dishes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        row.map(Dish::try_from).transpose()
    }

    /// Pairing candidates for wines whose name contains the given text,
    /// ordered by descending score.
    pub async fn find_pairings_for_wine(
        &self,
        wine_name: &str,
    ) -> Result<Vec<PairingHit>, CatalogError> {
        let hits: Vec<PairingHit> = sqlx::query_as(
            r#"
            SELECT p.dish_id, p.score FROM pairings p
            JOIN wines w ON p.wine_id = w.id
            WHERE w.name LIKE ?
            ORDER BY p.score DESC
            "#,
        )
        .bind(format!("%{}%", wine_name))
        .fetch_all(self.pool_manager.pool())
        .await?;

        info!(
            wine_name = %wine_name,
            candidates = hits.len(),
            "Retrieved pairing candidates"
        );
        Ok(hits)
    }
}
