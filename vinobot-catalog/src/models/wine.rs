//! Wine model: name, type, taste levels, region, vintage.
//!
//! Maps to the `wines` table; validation happens in [`Wine::new`] and the
//! setters, so a constructed `Wine` always satisfies the level and vintage
//! bounds.

use crate::error::CatalogError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Wine color/style category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WineType {
    Red,
    White,
    Rose,
    Dessert,
}

impl WineType {
    /// Stable string form used in the `wines.wine_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::Red => "Red",
            WineType::White => "White",
            WineType::Rose => "Rose",
            WineType::Dessert => "Dessert",
        }
    }
}

impl std::fmt::Display for WineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WineType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(WineType::Red),
            "white" => Ok(WineType::White),
            "rose" => Ok(WineType::Rose),
            "dessert" => Ok(WineType::Dessert),
            other => Err(CatalogError::Invalid(format!(
                "Unknown wine type: {}",
                other
            ))),
        }
    }
}

/// A wine with its taste profile. Levels are 1-5, vintage 1900..=current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wine {
    pub id: i64,
    pub name: String,
    pub wine_type: WineType,
    pub tannins: i64,
    pub acidity: i64,
    pub region: Option<String>,
    pub vintage: i64,
    pub description: Option<String>,
}

impl Wine {
    /// Creates a wine with the required fields, validating bounds.
    /// `id` is 0 until the catalog assigns one on insert.
    pub fn new(
        name: impl Into<String>,
        wine_type: WineType,
        tannins: i64,
        acidity: i64,
        vintage: i64,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::Invalid("Wine name must not be empty".into()));
        }
        validate_level("tannins", tannins)?;
        validate_level("acidity", acidity)?;
        validate_vintage(vintage)?;
        Ok(Self {
            id: 0,
            name,
            wine_type,
            tannins,
            acidity,
            region: None,
            vintage,
            description: None,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True for wines with tannins 4 or 5.
    pub fn is_full_bodied(&self) -> bool {
        self.tannins >= 4
    }

    /// True for wines with acidity 4 or 5.
    pub fn is_high_acidity(&self) -> bool {
        self.acidity >= 4
    }
}

impl std::fmt::Display for Wine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "*{}* ({}, {})\n🔹 Region: {}\n🔹 Tannins: {}/5\n🔹 Acidity: {}/5\n{}",
            self.name,
            self.wine_type,
            self.vintage,
            self.region.as_deref().unwrap_or("not specified"),
            self.tannins,
            self.acidity,
            self.description.as_deref().unwrap_or("No description"),
        )
    }
}

fn validate_level(field: &str, value: i64) -> Result<(), CatalogError> {
    if !(1..=5).contains(&value) {
        return Err(CatalogError::Invalid(format!(
            "{} must be between 1 and 5, got {}",
            field, value
        )));
    }
    Ok(())
}

fn validate_vintage(vintage: i64) -> Result<(), CatalogError> {
    let current_year = chrono::Utc::now().year() as i64;
    if !(1900..=current_year).contains(&vintage) {
        return Err(CatalogError::Invalid(format!(
            "Vintage must be between 1900 and {}, got {}",
            current_year, vintage
        )));
    }
    Ok(())
}
