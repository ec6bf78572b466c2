//! Favorites commands.

use harvest_hearth_client::favorites::FavoritesManager;

use super::Context;

/// Add the item to favorites, or remove it if already saved.
///
/// # Errors
///
/// Returns an error if the menu has no such item or the store rejects the write.
pub async fn toggle(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let item = ctx.item(id).await?;
    let outcome = FavoritesManager::new(ctx.store.clone()).toggle_favorite(&item)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", outcome.message());
    }
    Ok(())
}

/// List saved favorites.
pub fn list(ctx: &Context) {
    let favorites = FavoritesManager::new(ctx.store.clone()).get_favorites();

    #[allow(clippy::print_stdout)]
    {
        if favorites.is_empty() {
            println!("No favorites yet.");
        }
        for item in &favorites {
            println!("{:>4}  {} ({})", item.id.as_i32(), item.name, item.price.display());
        }
    }
}

/// Remove all favorites.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn clear(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    FavoritesManager::new(ctx.store.clone()).clear_favorites()?;
    tracing::info!("Favorites cleared");
    Ok(())
}
