//! Theme commands.

use harvest_hearth_client::theme::ThemeManager;

use super::Context;

/// Print the active theme.
pub fn show(ctx: &Context) {
    let theme = ThemeManager::initialize(ctx.store.clone(), ctx.config.prefers_dark);

    #[allow(clippy::print_stdout)]
    {
        println!("Theme: {}", theme.current());
    }
}

/// Switch between light and dark.
///
/// # Errors
///
/// Returns an error if the new theme cannot be stored.
pub fn toggle(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut theme = ThemeManager::initialize(ctx.store.clone(), ctx.config.prefers_dark);
    let next = theme.toggle()?;

    #[allow(clippy::print_stdout)]
    {
        println!("Theme: {next} (button: {})", next.toggle_label());
    }
    Ok(())
}
