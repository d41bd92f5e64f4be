//! Sort order for vault listings
//!
//! Parsed from `field:direction` strings such as `createdAt:desc`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::VaultError;

/// Field a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    /// Requires decrypting every entry
    Username,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Title => "title",
            Self::Username => "username",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "createdat" | "created" => Ok(Self::CreatedAt),
            "updatedat" | "updated" => Ok(Self::UpdatedAt),
            "title" => Ok(Self::Title),
            "username" | "user" => Ok(Self::Username),
            _ => Err(VaultError::Validation(format!(
                "Unknown sort field '{}' (expected createdAt, updatedAt, title or username)",
                s
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(VaultError::Validation(format!(
                "Unknown sort direction '{}' (expected asc or desc)",
                s
            ))),
        }
    }
}

/// A field plus direction; defaults to newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

impl FromStr for SortOrder {
    type Err = VaultError;

    /// Parse `field:direction`; a bare field sorts ascending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((field, direction)) => Ok(Self::new(field.parse()?, direction.parse()?)),
            None => Ok(Self::new(s.parse()?, SortDirection::Asc)),
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = VaultError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        assert_eq!(SortOrder::default().to_string(), "createdAt:desc");
    }

    #[test]
    fn test_parse_listing_options() {
        let cases = [
            ("createdAt:desc", SortField::CreatedAt, SortDirection::Desc),
            ("createdAt:asc", SortField::CreatedAt, SortDirection::Asc),
            ("title:asc", SortField::Title, SortDirection::Asc),
            ("title:desc", SortField::Title, SortDirection::Desc),
            ("updated_at:DESC", SortField::UpdatedAt, SortDirection::Desc),
            ("username", SortField::Username, SortDirection::Asc),
        ];

        for (input, field, direction) in cases {
            let order: SortOrder = input.parse().unwrap();
            assert_eq!(order, SortOrder::new(field, direction), "{}", input);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("password:asc".parse::<SortOrder>().unwrap_err().is_validation());
        assert!("title:sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let order = SortOrder::new(SortField::Username, SortDirection::Desc);
        assert_eq!(order.to_string().parse::<SortOrder>().unwrap(), order);
    }

    #[test]
    fn test_serde_as_string() {
        let order = SortOrder::new(SortField::Title, SortDirection::Asc);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, "\"title:asc\"");
        assert_eq!(serde_json::from_str::<SortOrder>(&json).unwrap(), order);
        assert!(serde_json::from_str::<SortOrder>("\"bogus\"").is_err());
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
