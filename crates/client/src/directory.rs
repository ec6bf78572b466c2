//! Chamber directory: member listing, spotlights and attractions.

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use harvest_hearth_core::{Attraction, Member};

use crate::catalog::{CatalogError, read_json_file};

/// Directory layout toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Style class for each member entry in this layout.
    #[must_use]
    pub const fn entry_class(self) -> &'static str {
        match self {
            Self::Grid => "member-card",
            Self::List => "member-list",
        }
    }
}

/// Members loaded for the directory page, with the current layout.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    members: Vec<Member>,
    view: ViewMode,
}

impl Directory {
    #[must_use]
    pub const fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            view: ViewMode::Grid,
        }
    }

    /// Load members from a JSON array file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let members = read_json_file(path).await?;
        Ok(Self::new(members))
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    pub const fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Pick home page spotlights; see [`spotlights`].
    pub fn spotlights<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Member> {
        spotlights(&self.members, rng)
    }
}

/// Pick two or three Silver/Gold members at random for the home page.
///
/// Fewer are returned when fewer premium members exist.
pub fn spotlights<R: Rng + ?Sized>(members: &[Member], rng: &mut R) -> Vec<Member> {
    let mut premium: Vec<Member> = members
        .iter()
        .filter(|m| m.membership_level.is_premium())
        .cloned()
        .collect();
    premium.shuffle(rng);
    let count = if rng.random_bool(0.5) { 3 } else { 2 };
    premium.truncate(count);
    premium
}

/// An attraction with its position in the discover page grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedAttraction<'a> {
    /// Grid area name, `area1` for the first attraction.
    pub grid_area: String,
    pub attraction: &'a Attraction,
}

/// Load the discover page attractions from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_attractions(path: &Path) -> Result<Vec<Attraction>, CatalogError> {
    read_json_file(path).await
}

/// Assign grid areas `area1..=areaN` in listing order.
#[must_use]
pub fn place_attractions(attractions: &[Attraction]) -> Vec<PlacedAttraction<'_>> {
    attractions
        .iter()
        .enumerate()
        .map(|(i, attraction)| PlacedAttraction {
            grid_area: format!("area{}", i + 1),
            attraction,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use harvest_hearth_core::MembershipLevel;

    use super::*;

    fn member(name: &str, level: u8) -> Member {
        Member {
            name: name.to_owned(),
            address: "1 Main St".to_owned(),
            phone: "208-555-0100".to_owned(),
            website: "https://example.com".to_owned(),
            image: String::new(),
            membership_level: MembershipLevel::from(level),
            description: String::new(),
        }
    }

    fn members() -> Vec<Member> {
        vec![
            member("Basic Co", 1),
            member("Silver Co", 2),
            member("Gold Co", 3),
            member("Other Silver", 2),
            member("Other Gold", 3),
            member("Mystery", 7),
        ]
    }

    #[test]
    fn test_spotlights_only_premium_and_sized() {
        for seed in 0..32 {
            let picked = spotlights(&members(), &mut StdRng::seed_from_u64(seed));
            assert!((2..=3).contains(&picked.len()));
            assert!(picked.iter().all(|m| m.membership_level.is_premium()));
        }
    }

    #[test]
    fn test_spotlights_with_few_premium_members() {
        let picked = spotlights(&[member("Solo Gold", 3), member("Basic", 1)], &mut StdRng::seed_from_u64(3));
        assert_eq!(picked.len(), 1);
        assert!(spotlights(&[], &mut StdRng::seed_from_u64(3)).is_empty());
    }

    #[test]
    fn test_view_mode_toggle() {
        let mut directory = Directory::new(members());
        assert_eq!(directory.view().entry_class(), "member-card");
        directory.set_view(ViewMode::List);
        assert_eq!(directory.view().entry_class(), "member-list");
    }

    #[test]
    fn test_place_attractions() {
        let attractions = vec![
            Attraction {
                name: "Greenbelt".to_owned(),
                address: "River Pkwy".to_owned(),
                description: "Riverside trail".to_owned(),
                image: String::new(),
            },
            Attraction {
                name: "Museum".to_owned(),
                address: "200 N Eastern".to_owned(),
                description: "Local history".to_owned(),
                image: String::new(),
            },
        ];
        let placed = place_attractions(&attractions);
        assert_eq!(placed[0].grid_area, "area1");
        assert_eq!(placed[1].grid_area, "area2");
        assert_eq!(placed[1].attraction.name, "Museum");
    }

    #[tokio::test]
    async fn test_load_members_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.json");
        std::fs::write(
            &path,
            r#"[{"name":"Bakery","address":"12 Main","phone":"555","website":"https://b.example","membershipLevel":2}]"#,
        )
        .unwrap();
        let directory = Directory::load(&path).await.unwrap();
        assert_eq!(directory.members().len(), 1);
        assert_eq!(directory.members()[0].membership_level, MembershipLevel::Silver);
    }
}
