use std::collections::{BTreeSet, HashSet};

// ---------------------------------------------------------------------------
// Listing – one row of the CSV
// ---------------------------------------------------------------------------

/// A single restaurant listing (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub restaurant: String,
    pub city: String,
    /// Comma-separated category labels, kept verbatim.
    pub food_type: String,
    /// Price for two, in currency units.
    pub price: f64,
    /// Average rating, typically 0–5.
    pub avg_rating: f64,
    /// Remaining CSV columns as text, aligned with [`Dataset::extra_columns`].
    pub extra: Vec<String>,
}

impl Listing {
    /// Trimmed, non-blank labels of the food type cell.
    pub fn food_labels(&self) -> impl Iterator<Item = &str> {
        split_food_types(&self.food_type)
    }
}

/// Split a food type cell on commas, trimming each piece and skipping blanks.
pub fn split_food_types(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full dataset. Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub listings: Vec<Listing>,
    /// Header names of the columns carried in [`Listing::extra`].
    pub extra_columns: Vec<String>,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>, extra_columns: Vec<String>) -> Self {
        Dataset {
            listings,
            extra_columns,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct cities in first-seen order.
    pub fn city_options(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.listings
            .iter()
            .filter(|l| seen.insert(l.city.as_str()))
            .map(|l| l.city.clone())
            .collect()
    }

    /// Every distinct food type label, sorted ascending (case-sensitive).
    pub fn food_type_options(&self) -> Vec<String> {
        let labels: BTreeSet<&str> = self.listings.iter().flat_map(|l| l.food_labels()).collect();
        labels.into_iter().map(str::to_string).collect()
    }

    /// Observed price range widened to whole units, or `None` when empty.
    ///
    /// The bounds are `floor(min)` and `ceil(max)` so the default range
    /// never excludes a listing.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut prices = self.listings.iter().map(|l| l.price);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((min.floor(), max.ceil()))
    }
}
