//! Keyword classification rules — the deterministic fallback path.
//!
//! These rules are pure text matching with no I/O and no model dependency.
//! They are evaluated in fixed priority order, so a request containing both
//! "payment" and "claim" resolves to the billing category because the
//! billing rule is listed first.

use crate::core::category::Category;

/// Keyword rule table, in priority order. First match wins.
const RULES: &[(&[&str], Category)] = &[
    (&["payment", "card"], Category::AccountBilling),
    (&["claim", "accident", "insurance"], Category::InsuranceClaims),
    (&["order", "book", "status"], Category::OrderStatus),
];

/// Classify a request by keyword presence alone.
///
/// Total: always returns a member of the closed set, [`Category::Other`]
/// when no rule matches.
pub fn classify_by_keywords(request: &str) -> Category {
    let lower = request.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_keywords() {
        assert_eq!(
            classify_by_keywords("I need to update my payment card"),
            Category::AccountBilling
        );
        assert_eq!(
            classify_by_keywords("My CARD was declined"),
            Category::AccountBilling
        );
    }

    #[test]
    fn test_insurance_keywords() {
        assert_eq!(
            classify_by_keywords("I was in a car accident and need to file an insurance claim"),
            Category::InsuranceClaims
        );
    }

    #[test]
    fn test_order_keywords() {
        assert_eq!(
            classify_by_keywords("Can you give me an update on the order status?"),
            Category::OrderStatus
        );
        assert_eq!(
            classify_by_keywords("I recently ordered a book online"),
            Category::OrderStatus
        );
    }

    #[test]
    fn test_priority_order() {
        // "payment" outranks "claim" because the billing rule is listed first
        assert_eq!(
            classify_by_keywords("a payment dispute about my claim"),
            Category::AccountBilling
        );
        // "claim" outranks "order"
        assert_eq!(
            classify_by_keywords("claim about my order"),
            Category::InsuranceClaims
        );
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(classify_by_keywords("asdkjasd"), Category::Other);
        assert_eq!(classify_by_keywords(""), Category::Other);
    }
}
