//! Harvest & Hearth CLI - browse the menu and manage the order list.
//!
//! # Usage
//!
//! ```bash
//! # Vegetarian mains under $20, cheapest first
//! hh-cli menu list --category main --diet vegetarian --max 20 --sort price-asc
//!
//! # Add an item to the order list and show the summary
//! hh-cli order add 3
//! hh-cli order show
//!
//! # Toggle a favorite
//! hh-cli favorites toggle 3
//!
//! # Flip dark mode
//! hh-cli theme toggle
//! ```
//!
//! # Commands
//!
//! - `menu` - List, search and inspect menu items
//! - `order` - Manage the order list
//! - `favorites` - Manage saved favorites
//! - `prefs` - Show or change the stored diet and sort preferences
//! - `theme` - Show or toggle the colour theme
//! - `visit` - Record a visit and print the last-visit message
//! - `testimonials` - Browse guest testimonials
//! - `courses` - List certificate courses and credits
//! - `directory` - Chamber member directory, spotlights and attractions
//!
//! Configuration comes from `HH_*` environment variables (see
//! `harvest_hearth_client::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hh-cli")]
#[command(author, version, about = "Harvest & Hearth menu and order tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Manage the order list
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Show or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Show or change the colour theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Record a visit and print the welcome message
    Visit,
    /// Browse guest testimonials
    Testimonials {
        #[command(subcommand)]
        action: TestimonialsAction,
    },
    /// List certificate courses
    Courses {
        /// Subject filter (`all`, `wdd`, `cse`)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// Chamber member directory
    Directory {
        #[command(subcommand)]
        action: DirectoryAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items through the filter pipeline
    List {
        /// Category, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Diet filter (`all`, `vegetarian`, `seasonal`); defaults to the stored preference
        #[arg(short, long)]
        diet: Option<String>,

        /// Case-insensitive search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Minimum price, inclusive
        #[arg(long, default_value = "")]
        min: String,

        /// Maximum price, inclusive
        #[arg(long, default_value = "")]
        max: String,

        /// Sort order (`name`, `price-asc`, `price-desc`); defaults to the stored preference
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one item in detail
    Show {
        /// Item ID
        id: i32,
    },
    /// List categories and farm partners
    Categories,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Add one of an item
    Add {
        /// Item ID
        id: i32,
    },
    /// Remove an item's line
    Remove {
        /// Item ID
        id: i32,
    },
    /// Set an item's quantity; zero or less removes it
    Set {
        /// Item ID
        id: i32,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show the order summary
    Show {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear the order list
    Clear,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Add or remove an item
    Toggle {
        /// Item ID
        id: i32,
    },
    /// List saved favorites
    List,
    /// Remove all favorites
    Clear,
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show stored preferences
    Show,
    /// Update stored preferences
    Set {
        /// Diet filter (`all`, `vegetarian`, `seasonal`)
        #[arg(short, long)]
        diet: Option<String>,

        /// Sort order (`name`, `price-asc`, `price-desc`)
        #[arg(short, long)]
        sort: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
enum TestimonialsAction {
    /// List all testimonials
    List,
    /// Show one testimonial by ID
    Show {
        /// Testimonial ID
        id: i32,
    },
    /// Show a random testimonial
    Random,
    /// Auto-advance the carousel for a number of slides
    Play {
        /// Number of slides to show
        #[arg(short, long, default_value_t = 3)]
        slides: usize,
    },
}

#[derive(Subcommand)]
enum DirectoryAction {
    /// List members
    List {
        /// Show one line per member instead of cards
        #[arg(long)]
        list: bool,
    },
    /// Pick Silver/Gold members for the home page
    Spotlights,
    /// List discover page attractions with their grid areas
    Attractions,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "harvest_hearth_client=info,hh_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Menu { action } => match action {
            MenuAction::List {
                category,
                diet,
                search,
                min,
                max,
                sort,
            } => {
                let args = commands::menu::ListArgs {
                    category,
                    diet,
                    search,
                    min,
                    max,
                    sort,
                };
                commands::menu::list(&ctx, &args).await?;
            }
            MenuAction::Show { id } => commands::menu::show(&ctx, id).await?,
            MenuAction::Categories => commands::menu::categories(&ctx).await?,
        },
        Commands::Order { action } => match action {
            OrderAction::Add { id } => commands::order::add(&ctx, id).await?,
            OrderAction::Remove { id } => commands::order::remove(&ctx, id)?,
            OrderAction::Set { id, quantity } => commands::order::set(&ctx, id, quantity)?,
            OrderAction::Show { json } => commands::order::show(&ctx, json)?,
            OrderAction::Clear => commands::order::clear(&ctx)?,
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Toggle { id } => commands::favorites::toggle(&ctx, id).await?,
            FavoritesAction::List => commands::favorites::list(&ctx),
            FavoritesAction::Clear => commands::favorites::clear(&ctx)?,
        },
        Commands::Prefs { action } => match action {
            PrefsAction::Show => commands::prefs::show(&ctx),
            PrefsAction::Set { diet, sort } => {
                commands::prefs::set(&ctx, diet.as_deref(), sort.as_deref())?;
            }
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx),
            ThemeAction::Toggle => commands::theme::toggle(&ctx)?,
        },
        Commands::Visit => commands::visit::record(&ctx)?,
        Commands::Testimonials { action } => match action {
            TestimonialsAction::List => commands::testimonials::list(&ctx).await?,
            TestimonialsAction::Show { id } => commands::testimonials::show(&ctx, id).await?,
            TestimonialsAction::Random => commands::testimonials::random(&ctx).await?,
            TestimonialsAction::Play { slides } => {
                commands::testimonials::play(&ctx, slides).await?;
            }
        },
        Commands::Courses { filter } => commands::courses::list(&ctx, &filter).await?,
        Commands::Directory { action } => match action {
            DirectoryAction::List { list } => commands::directory::list(&ctx, list).await?,
            DirectoryAction::Spotlights => commands::directory::spotlights(&ctx).await?,
            DirectoryAction::Attractions => commands::directory::attractions(&ctx).await?,
        },
    }
    Ok(())
}
