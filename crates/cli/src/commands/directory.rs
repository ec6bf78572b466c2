//! Chamber directory commands.

use harvest_hearth_client::directory::{Directory, ViewMode, load_attractions, place_attractions};
use harvest_hearth_core::Member;

use super::Context;

/// List members as cards, or one line each with `list`.
///
/// # Errors
///
/// Returns an error if the members file cannot be loaded.
pub async fn list(ctx: &Context, list: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut directory = Directory::load(&ctx.config.members_path).await?;
    if list {
        directory.set_view(ViewMode::List);
    }

    #[allow(clippy::print_stdout)]
    {
        for member in directory.members() {
            match directory.view() {
                ViewMode::Grid => print_card(member),
                ViewMode::List => println!(
                    "{} | {} | {} | {}",
                    member.name, member.address, member.phone, member.website
                ),
            }
        }
    }
    Ok(())
}

/// Pick and print two or three Silver/Gold members.
///
/// # Errors
///
/// Returns an error if the members file cannot be loaded.
pub async fn spotlights(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let directory = Directory::load(&ctx.config.members_path).await?;
    directory
        .spotlights(&mut rand::rng())
        .iter()
        .for_each(print_card);
    Ok(())
}

/// Print attractions with their grid areas.
///
/// # Errors
///
/// Returns an error if the attractions file cannot be loaded.
pub async fn attractions(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let attractions = load_attractions(&ctx.config.attractions_path).await?;

    #[allow(clippy::print_stdout)]
    {
        for placed in place_attractions(&attractions) {
            println!("{:<7} {}", placed.grid_area, placed.attraction.name);
            println!("        {}", placed.attraction.address);
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_card(member: &Member) {
    println!("{} [{}]", member.name, member.membership_level.label());
    println!("  Address: {}", member.address);
    println!("  Phone:   {}", member.phone);
    println!("  Website: {}", member.website);
}
