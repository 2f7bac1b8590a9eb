//! Category value object representing the closed label set

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Service categories a customer request can be assigned to (Value Object)
///
/// This is a closed set: every classification result is a member, and
/// [`Category::Other`] is the catch-all produced when no better label
/// applies or when classification degraded to its fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    OrderStatus,
    Returns,
    Travel,
    InsuranceClaims,
    AccountBilling,
    TechnicalSupport,
    Sales,
    Other,
}

impl Category {
    /// Get the display label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OrderStatus => "Order Status & Fulfillment",
            Category::Returns => "Returns, Cancellations & Exchange",
            Category::Travel => "Travel & Hospitality Bookings",
            Category::InsuranceClaims => "Insurance Claims & Coverage",
            Category::AccountBilling => "Account Management & Billing",
            Category::TechnicalSupport => "Technical Support & Troubleshooting",
            Category::Sales => "Sales & Quotes",
            Category::Other => "Other",
        }
    }

    /// All categories, in stable presentation order
    pub fn all() -> &'static [Category] {
        &[
            Category::OrderStatus,
            Category::Returns,
            Category::Travel,
            Category::InsuranceClaims,
            Category::AccountBilling,
            Category::TechnicalSupport,
            Category::Sales,
            Category::Other,
        ]
    }

    /// Parse a label leniently: case-insensitive, whitespace-normalized.
    ///
    /// Returns `None` for anything outside the closed set so that callers
    /// substitute [`Category::Other`] explicitly — an invented label from a
    /// model response must never pass through.
    pub fn parse_label(label: &str) -> Option<Category> {
        let normalized = normalize(label);
        Category::all()
            .iter()
            .copied()
            .find(|c| normalize(c.as_str()) == normalized)
    }
}

/// Lowercase and collapse internal whitespace
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    /// Strict parse used at the corpus boundary, where an unknown label is a
    /// contract violation rather than something to paper over with `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_label(s).ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
