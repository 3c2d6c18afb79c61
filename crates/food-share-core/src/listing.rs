//! Listing Utilities
//!
//! Search, ordering and layout helpers for the food listing views.

use std::cmp::Ordering;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::domain::Food;

/// Expiry sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Soonest expiry first
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Expiry: soonest first",
            SortOrder::Descending => "Expiry: latest first",
        }
    }
}

/// Grid width of the available-foods view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridColumns {
    #[default]
    Three,
    Two,
}

impl GridColumns {
    pub fn toggle(self) -> Self {
        match self {
            GridColumns::Three => GridColumns::Two,
            GridColumns::Two => GridColumns::Three,
        }
    }

    pub fn count(self) -> u8 {
        match self {
            GridColumns::Three => 3,
            GridColumns::Two => 2,
        }
    }
}

/// Search term plus sort order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub order: SortOrder,
}

impl ListingQuery {
    pub fn new(search: impl Into<String>, order: SortOrder) -> Self {
        Self { search: search.into(), order }
    }

    /// Case-insensitive name filter, then expiry sort.
    /// Unparseable expiry dates go last regardless of direction.
    pub fn apply(&self, foods: &[Food]) -> Vec<Food> {
        let needle = self.search.to_lowercase();
        let mut matched: Vec<(Option<DateTime<Utc>>, &Food)> = foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .map(|food| (parse_expiry(&food.expire_date), food))
            .collect();

        matched.sort_by(|(a, _), (b, _)| compare_expiry(*a, *b, self.order));
        matched.into_iter().map(|(_, food)| food.clone()).collect()
    }
}

fn compare_expiry(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
    }
}

/// Largest listings by quantity, for the home page
pub fn featured(foods: &[Food], limit: usize) -> Vec<Food> {
    let mut sorted = foods.to_vec();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sorted.truncate(limit);
    sorted
}

/// Parse an expiry timestamp.
///
/// Accepts RFC 3339 and the `datetime-local` input shapes
/// (`YYYY-MM-DDTHH:MM[:SS]`), the latter read in the browser's local time.
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    parse_expiry_in(raw, &Local)
}

/// [`parse_expiry`] with naive shapes read in `tz`
pub fn parse_expiry_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?;
    // Ambiguous wall-clock times (DST fall-back) take the earlier instant
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Human readable expiry in local time, `N/A` when missing or invalid
pub fn format_expiry(raw: &str) -> String {
    format_expiry_in(raw, &Local)
}

/// [`format_expiry`] rendered in `tz`
pub fn format_expiry_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse_expiry_in(raw, tz)
        .map(|date| date.with_timezone(tz).format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
