use std::collections::{BTreeMap, HashMap};

use super::filter::FilteredView;
use super::model::Listing;

/// Maximum number of entries in the food type ranking.
pub const TOP_FOOD_TYPES: usize = 10;

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Headline numbers for a non-empty view.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub avg_price: f64,
    pub avg_rating: f64,
    /// Best-rated listing; the first one wins ties.
    pub highest_rated: Listing,
}

impl SummaryStats {
    pub fn avg_price_label(&self) -> String {
        format!("{:.2}", self.avg_price)
    }

    pub fn avg_rating_label(&self) -> String {
        format!("{:.2}", self.avg_rating)
    }

    /// e.g. `"Curry House (4.8 stars)"`; whole ratings keep one decimal (`4.0`).
    pub fn highest_rated_label(&self) -> String {
        format!(
            "{} ({:?} stars)",
            self.highest_rated.restaurant, self.highest_rated.avg_rating
        )
    }
}

/// Summarise a view, or `None` when it has no rows.
pub fn compute_summary(view: &FilteredView<'_>) -> Option<SummaryStats> {
    let mut rows = view.iter();
    let first = rows.next()?;

    let mut count = 1usize;
    let mut price_sum = first.price;
    let mut rating_sum = first.avg_rating;
    let mut best = first;
    for l in rows {
        count += 1;
        price_sum += l.price;
        rating_sum += l.avg_rating;
        // strict comparison keeps the earliest maximum
        if l.avg_rating > best.avg_rating {
            best = l;
        }
    }

    Some(SummaryStats {
        count,
        avg_price: price_sum / count as f64,
        avg_rating: rating_sum / count as f64,
        highest_rated: best.clone(),
    })
}

// ---------------------------------------------------------------------------
// Food type ranking
// ---------------------------------------------------------------------------

/// Mean rating of every listing carrying one food type label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRating {
    pub label: String,
    pub mean_rating: f64,
    /// Number of listings that contributed.
    pub listings: usize,
}

/// Rank food type labels by mean rating, best first, keeping the top ten.
///
/// Each listing counts once towards every trimmed label in its food type
/// cell. Groups are formed in ascending label order and sorted stably, so
/// equal means keep that order.
pub fn compute_category_aggregate(view: &FilteredView<'_>) -> Vec<CategoryRating> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for l in view.iter() {
        for label in l.food_labels() {
            let entry = groups.entry(label).or_insert((0.0, 0));
            entry.0 += l.avg_rating;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<CategoryRating> = groups
        .into_iter()
        .map(|(label, (sum, n))| CategoryRating {
            label: label.to_string(),
            mean_rating: sum / n as f64,
            listings: n,
        })
        .collect();
    ranked.sort_by(|a, b| b.mean_rating.total_cmp(&a.mean_rating));
    ranked.truncate(TOP_FOOD_TYPES);
    ranked
}

// ---------------------------------------------------------------------------
// City counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCount {
    pub city: String,
    pub listings: usize,
}

/// Listings per city, most first; ties keep first-seen order.
pub fn compute_city_counts(view: &FilteredView<'_>) -> Vec<CityCount> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CityCount> = Vec::new();
    for l in view.iter() {
        match position.get(l.city.as_str()) {
            Some(&i) => counts[i].listings += 1,
            None => {
                position.insert(l.city.as_str(), counts.len());
                counts.push(CityCount {
                    city: l.city.clone(),
                    listings: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.listings.cmp(&a.listings));
    counts
}
