//! Chamber of commerce directory records.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Chamber membership tier.
///
/// The directory data encodes tiers as integers: 1 Member, 2 Silver, 3 Gold.
/// Any other number is kept as `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MembershipLevel {
    Member,
    Silver,
    Gold,
    Unknown(u8),
}

impl MembershipLevel {
    /// Display label for badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Silver and Gold members are eligible for the home page spotlight.
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Silver | Self::Gold)
    }
}

impl From<u8> for MembershipLevel {
    fn from(level: u8) -> Self {
        match level {
            1 => Self::Member,
            2 => Self::Silver,
            3 => Self::Gold,
            other => Self::Unknown(other),
        }
    }
}

impl From<MembershipLevel> for u8 {
    fn from(level: MembershipLevel) -> Self {
        match level {
            MembershipLevel::Member => 1,
            MembershipLevel::Silver => 2,
            MembershipLevel::Gold => 3,
            MembershipLevel::Unknown(other) => other,
        }
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A member business listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    #[serde(default)]
    pub image: String,
    pub membership_level: MembershipLevel,
    #[serde(default)]
    pub description: String,
}

/// A local attraction on the discover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_labels() {
        assert_eq!(MembershipLevel::from(1).label(), "Member");
        assert_eq!(MembershipLevel::from(2).label(), "Silver");
        assert_eq!(MembershipLevel::from(3).label(), "Gold");
        assert_eq!(MembershipLevel::from(9).label(), "Unknown");
    }

    #[test]
    fn test_member_deserialize_numeric_level() {
        let json = r#"{
            "name": "Snake River Bakery",
            "address": "12 Main St",
            "phone": "208-555-0101",
            "website": "https://example.com",
            "membershipLevel": 3
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.membership_level, MembershipLevel::Gold);
        assert!(member.membership_level.is_premium());
        assert_eq!(serde_json::to_value(&member).unwrap()["membershipLevel"], 3);
    }
}
