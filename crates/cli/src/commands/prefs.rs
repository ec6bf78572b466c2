//! Preference commands.

use harvest_hearth_client::preferences::PreferencesStore;
use harvest_hearth_core::{DietFilter, SortOrder};

use super::Context;

/// Print the stored preferences.
pub fn show(ctx: &Context) {
    let prefs = PreferencesStore::new(ctx.store.clone()).get_user_preferences();

    #[allow(clippy::print_stdout)]
    {
        println!("Diet: {}", prefs.dietary_restriction);
        println!("Sort: {}", prefs.sort_by);
    }
}

/// Update the stored diet and sort preferences. Unset values are kept.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn set(
    ctx: &Context,
    diet: Option<&str>,
    sort: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = PreferencesStore::new(ctx.store.clone());
    let mut prefs = store.get_user_preferences();
    if let Some(diet) = diet {
        prefs.dietary_restriction = DietFilter::from(diet);
    }
    if let Some(sort) = sort {
        prefs.sort_by = SortOrder::from(sort);
    }
    store.save_user_preferences(&prefs)?;
    tracing::info!(
        diet = %prefs.dietary_restriction,
        sort = %prefs.sort_by,
        "Preferences saved"
    );
    Ok(())
}
