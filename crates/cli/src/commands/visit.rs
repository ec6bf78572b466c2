//! Visit tracking command.

use chrono::Utc;

use harvest_hearth_client::preferences::PreferencesStore;

use super::Context;

/// Count this visit and print the greeting for the time since the last one.
///
/// # Errors
///
/// Returns an error if the visit count cannot be stored.
pub fn record(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = PreferencesStore::new(ctx.store.clone());
    let message = prefs.record_visit(Utc::now());
    let count = prefs.increment_visit_count()?;

    #[allow(clippy::print_stdout)]
    {
        println!("{message}");
        println!("Visits: {count}");
    }
    Ok(())
}
