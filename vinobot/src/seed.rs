//! Seed subcommand: populate the catalog with a small demo set.

use anyhow::Result;
use vinobot_catalog::{CatalogRepository, Dish, DishCategory, Wine, WineType};

/// Inserts demo wines, dishes, and pairing scores, printing what was added.
pub async fn cmd_seed(database_url: &str) -> Result<()> {
    let catalog = CatalogRepository::new(database_url).await?;

    let merlot = catalog
        .add_wine(
            &Wine::new("Merlot Reserve", WineType::Red, 4, 3, 2018)?
                .with_region("Bordeaux")
                .with_description("Plum and cedar, soft finish"),
        )
        .await?;
    let riesling = catalog
        .add_wine(
            &Wine::new("Riesling Kabinett", WineType::White, 1, 5, 2021)?
                .with_region("Mosel")
                .with_description("Green apple, bright acidity"),
        )
        .await?;
    let rose = catalog
        .add_wine(&Wine::new("Provence Rose", WineType::Rose, 2, 4, 2022)?.with_region("Provence"))
        .await?;
    let port = catalog
        .add_wine(
            &Wine::new("Tawny Port", WineType::Dessert, 3, 2, 2015)?.with_region("Douro"),
        )
        .await?;

    let duck = catalog
        .add_dish(
            &Dish::new("Duck", DishCategory::Meat, 4, 5, 90)?
                .with_ingredients("duck, orange, thyme"),
        )
        .await?;
    let cheesecake = catalog
        .add_dish(&Dish::new("Cheesecake", DishCategory::Dessert, 5, 2, 60)?)
        .await?;
    let trout = catalog
        .add_dish(&Dish::new("Grilled Trout", DishCategory::Fish, 2, 4, 30)?)
        .await?;
    let salad = catalog
        .add_dish(&Dish::new("Goat Cheese Salad", DishCategory::Vegetable, 2, 2, 15)?)
        .await?;
    let stilton = catalog
        .add_dish(&Dish::new("Stilton", DishCategory::Cheese, 5, 3, 0)?)
        .await?;

    catalog.add_pairing(merlot, duck, 9).await?;
    catalog.add_pairing(merlot, cheesecake, 5).await?;
    catalog.add_pairing(riesling, trout, 9).await?;
    catalog.add_pairing(riesling, salad, 7).await?;
    catalog.add_pairing(rose, salad, 8).await?;
    catalog.add_pairing(rose, trout, 6).await?;
    catalog.add_pairing(port, stilton, 9).await?;
    catalog.add_pairing(port, cheesecake, 8).await?;

    println!("Seeded catalog at {}: 4 wines, 5 dishes, 8 pairings", database_url);
    Ok(())
}
