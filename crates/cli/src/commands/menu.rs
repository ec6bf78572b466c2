//! Menu browsing commands.

use harvest_hearth_client::catalog::filter::{unique_categories, unique_farm_partners};
use harvest_hearth_client::catalog::{CategoryFilter, PriceRange};
use harvest_hearth_client::preferences::PreferencesStore;
use harvest_hearth_client::session::{FetchState, MenuSession};
use harvest_hearth_core::{CatalogItem, DietFilter, SortOrder};

use super::Context;

/// Arguments for `menu list`.
pub struct ListArgs {
    pub category: String,
    pub diet: Option<String>,
    pub search: String,
    pub min: String,
    pub max: String,
    pub sort: Option<String>,
}

/// List menu items through the filter pipeline.
///
/// Diet and sort fall back to the stored preferences when not given.
///
/// # Errors
///
/// Returns an error if a price bound is invalid or the menu fails to load.
pub async fn list(ctx: &Context, args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let range = PriceRange::parse(&args.min, &args.max)?;
    let prefs = PreferencesStore::new(ctx.store.clone()).get_user_preferences();

    let mut session = MenuSession::new(prefs);
    session.load(&ctx.config.catalog).await;
    if let FetchState::Failed(message) = session.state() {
        return Err(message.clone().into());
    }

    session.select_category(CategoryFilter::from(args.category.as_str()));
    if let Some(diet) = &args.diet {
        session.select_diet(DietFilter::from(diet.as_str()));
    } else {
        session.select_diet(prefs.dietary_restriction);
    }
    session.set_search(&args.search);
    session.set_price_range(range.min, range.max);
    if let Some(sort) = &args.sort {
        session.set_sort(SortOrder::from(sort.as_str()));
    }

    let items = session.visible();
    tracing::debug!(
        shown = items.len(),
        total = session.catalog().len(),
        "Menu filtered"
    );

    #[allow(clippy::print_stdout)]
    {
        if items.is_empty() {
            println!("No menu items match your filters.");
        }
        for item in &items {
            println!("{}", summary_line(item));
        }
    }
    Ok(())
}

/// Show one item in detail.
///
/// # Errors
///
/// Returns an error if the menu fails to load or has no such item.
pub async fn show(ctx: &Context, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let item = ctx.item(id).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{} ({})", item.name, item.price.display());
        println!("  Category: {}", item.category);
        if !item.description.is_empty() {
            println!("  {}", item.description);
        }
        if let Some(partner) = &item.farm_partner {
            println!("  From: {partner}");
        }
        println!("  {}", diet_tags(&item));
    }
    Ok(())
}

/// List the categories and farm partners present in the menu.
///
/// # Errors
///
/// Returns an error if the menu fails to load.
pub async fn categories(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ctx.catalog().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Categories: {}", unique_categories(catalog.items()).join(", "));
        println!(
            "Farm partners: {}",
            unique_farm_partners(catalog.items()).join(", ")
        );
    }
    Ok(())
}

fn summary_line(item: &CatalogItem) -> String {
    format!(
        "{:>4}  {:<32} {:>8}  {:<10} {}",
        item.id.as_i32(),
        item.name,
        item.price.display(),
        item.category,
        diet_tags(item)
    )
}

fn diet_tags(item: &CatalogItem) -> String {
    let mut tags = Vec::new();
    if item.vegetarian {
        tags.push("vegetarian");
    }
    if item.seasonal {
        tags.push("seasonal");
    }
    tags.join(", ")
}
