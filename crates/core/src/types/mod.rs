//! Core types for Harvest & Hearth.
//!
//! This module provides type-safe wrappers and records for the domain concepts
//! shared by the restaurant, chamber directory and course pages.

pub mod catalog;
pub mod course;
pub mod directory;
pub mod id;
pub mod order;
pub mod preferences;
pub mod price;
pub mod testimonial;
pub mod theme;

pub use catalog::{CatalogItem, FavoriteEntry};
pub use course::Course;
pub use directory::{Attraction, Member, MembershipLevel};
pub use id::*;
pub use order::{OrderLine, OrderSummary};
pub use preferences::{DietFilter, SortOrder, UserPreferences};
pub use price::{Price, PriceParseError};
pub use testimonial::Testimonial;
pub use theme::Theme;
