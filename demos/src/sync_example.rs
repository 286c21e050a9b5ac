use dotenv::dotenv;
use log::info;
use paprika_sync::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();
    pretty_env_logger::init();

    let email = env::var("PAPRIKA_EMAIL").expect("PAPRIKA_EMAIL must be set");
    let password = env::var("PAPRIKA_PASSWORD").expect("PAPRIKA_PASSWORD must be set");

    let paprika = Paprika::new(&email, &password);
    let sync = paprika.sync();

    let status = sync.status().await?;
    println!("Account status: {}", serde_json::to_string_pretty(&status)?);

    let categories = sync.categories().await?;
    for category in categories.iter().filter(|c| c.parent_uid.is_none()) {
        let children = categories
            .iter()
            .filter(|c| c.parent_uid.as_deref() == Some(category.uid.as_str()))
            .count();
        println!("Category {} ({} subcategories)", category.name, children);
    }

    let recipes = sync.recipes().await?;
    info!("Fetched {} recipe entries", recipes.len());

    // Full records are fetched one at a time
    for item in recipes.iter().take(3) {
        match sync.recipe(&item.uid).await {
            Ok(recipe) => println!(
                "{} | prep {} | cook {} | {} categories",
                recipe.name,
                recipe.prep_time,
                recipe.cook_time,
                recipe.categories.len()
            ),
            Err(Error::Status { status: 404, .. }) => {
                println!("Recipe {} disappeared since listing", item.uid)
            }
            Err(e) => return Err(e.into()),
        }
    }

    let groceries = sync.groceries().await?;
    let open = groceries.iter().filter(|g| !g.purchased).count();
    println!("Grocery list: {} items, {} still to buy", groceries.len(), open);

    let menus = sync.menus().await?;
    let menu_items = sync.menu_items().await?;
    for menu in &menus {
        let count = menu_items.iter().filter(|i| i.menu_uid == menu.uid).count();
        println!("Menu {}: {} items", menu.name, count);
    }

    println!("Meals planned: {}", sync.meals().await?.len());
    println!("Pantry items: {}", sync.pantry().await?.len());
    println!("Bookmarks: {}", sync.bookmarks().await?.len());

    Ok(())
}
