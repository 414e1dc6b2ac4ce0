use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use super::model::{Dataset, Listing};

// ---------------------------------------------------------------------------
// Filter selection: what the user has chosen in the side panel
// ---------------------------------------------------------------------------

/// Food type selector value: the "All" sentinel or one label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FoodTypeChoice {
    #[default]
    All,
    Label(String),
}

impl FoodTypeChoice {
    /// Whether a raw food type cell passes this choice.
    ///
    /// Labels match as a case-insensitive substring of the whole cell, so
    /// "Chinese" also matches "South Chinese, Noodles".
    pub fn matches(&self, food_type: &str) -> bool {
        match self {
            FoodTypeChoice::All => true,
            FoodTypeChoice::Label(label) => food_type
                .to_lowercase()
                .contains(&label.to_lowercase()),
        }
    }
}

impl fmt::Display for FoodTypeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodTypeChoice::All => write!(f, "All"),
            FoodTypeChoice::Label(label) => write!(f, "{label}"),
        }
    }
}

/// The current user-chosen constraints. All three compose as AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    /// Selected cities. Empty means nothing is shown, not "no filter".
    pub cities: BTreeSet<String>,
    pub food_type: FoodTypeChoice,
    /// Inclusive `[low, high]` price range.
    pub price_range: (f64, f64),
}

impl FilterSelection {
    /// The default selection: every city, all food types, the full price range.
    pub fn everything(dataset: &Dataset) -> Self {
        FilterSelection {
            cities: dataset.city_options().into_iter().collect(),
            food_type: FoodTypeChoice::All,
            price_range: dataset.price_bounds().unwrap_or((0.0, 0.0)),
        }
    }

    fn city_matches(&self, listing: &Listing) -> bool {
        self.cities.contains(&listing.city)
    }

    fn price_matches(&self, listing: &Listing) -> bool {
        let (low, high) = self.price_range;
        listing.price >= low && listing.price <= high
    }
}

// ---------------------------------------------------------------------------
// Filtered view: borrowed subset of the dataset
// ---------------------------------------------------------------------------

/// The listings matching a [`FilterSelection`], in dataset order.
///
/// Indices are owned when freshly filtered and borrowed when a cached
/// index list is re-wrapped for rendering.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Cow<'a, [usize]>,
}

impl<'a> FilteredView<'a> {
    /// Build a view that owns its dataset indices.
    pub fn from_indices(dataset: &'a Dataset, indices: Vec<usize>) -> Self {
        debug_assert!(indices.iter().all(|&i| i < dataset.len()));
        FilteredView {
            dataset,
            indices: Cow::Owned(indices),
        }
    }

    /// Build a view over an index list held elsewhere, without copying it.
    pub fn borrowed(dataset: &'a Dataset, indices: &'a [usize]) -> Self {
        debug_assert!(indices.iter().all(|&i| i < dataset.len()));
        FilteredView {
            dataset,
            indices: Cow::Borrowed(indices),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Dataset indices of the matching listings.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate the matching listings in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        let dataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.listings[i])
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices.into_owned()
    }
}

/// Return the view of listings that pass all three filters.
///
/// Filters run city → food type → price. A listing passes when:
/// * its city is in the selected set (an empty set passes nothing)
/// * the food type choice is `All` or its label is a case-insensitive
///   substring of the listing's food type text
/// * its price lies within the inclusive range
pub fn apply_filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .listings
        .iter()
        .enumerate()
        .filter(|(_, l)| selection.city_matches(l))
        .filter(|(_, l)| selection.food_type.matches(&l.food_type))
        .filter(|(_, l)| selection.price_matches(l))
        .map(|(i, _)| i)
        .collect();
    FilteredView::from_indices(dataset, indices)
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::{arb_dataset, listing, pizza_and_curry, CITIES, LABELS};

    /// Any selection: a city subset (possibly empty), `All` or a label in
    /// any casing, and an ordered price range.
    pub(crate) fn arb_selection() -> impl Strategy<Value = FilterSelection> {
        let food_type = prop_oneof![
            1 => Just(FoodTypeChoice::All),
            2 => prop::sample::select(LABELS.to_vec())
                .prop_map(|s| FoodTypeChoice::Label(s.to_string())),
            1 => prop::sample::select(LABELS.to_vec())
                .prop_map(|s| FoodTypeChoice::Label(s.to_uppercase())),
        ];
        (
            prop::sample::subsequence(CITIES.to_vec(), 0..=CITIES.len()),
            food_type,
            0u32..=1000,
            0u32..=1000,
        )
            .prop_map(|(cities, food_type, a, b)| FilterSelection {
                cities: cities.into_iter().map(str::to_string).collect(),
                food_type,
                price_range: (a.min(b) as f64, a.max(b) as f64),
            })
    }

    fn passes(sel: &FilterSelection, l: &Listing) -> bool {
        let (low, high) = sel.price_range;
        let food_ok = match &sel.food_type {
            FoodTypeChoice::All => true,
            FoodTypeChoice::Label(label) => {
                l.food_type.to_lowercase().contains(&label.to_lowercase())
            }
        };
        sel.cities.contains(&l.city) && food_ok && l.price >= low && l.price <= high
    }

    proptest! {
        #[test]
        fn view_is_exactly_the_matching_subset(ds in arb_dataset(), sel in arb_selection()) {
            let view = apply_filter(&ds, &sel);
            prop_assert!(view.indices().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(view.indices().iter().all(|&i| i < ds.len()));
            for l in view.iter() {
                prop_assert!(passes(&sel, l));
            }
            let expected: Vec<usize> = (0..ds.len())
                .filter(|&i| passes(&sel, &ds.listings[i]))
                .collect();
            prop_assert_eq!(view.indices(), expected.as_slice());
        }

        #[test]
        fn filtering_is_idempotent(ds in arb_dataset(), sel in arb_selection()) {
            let first = apply_filter(&ds, &sel).into_indices();
            let second = apply_filter(&ds, &sel).into_indices();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn no_cities_means_no_rows(ds in arb_dataset(), mut sel in arb_selection()) {
            sel.cities.clear();
            prop_assert!(apply_filter(&ds, &sel).is_empty());
        }

        #[test]
        fn default_selection_keeps_everything(ds in arb_dataset()) {
            let view = apply_filter(&ds, &FilterSelection::everything(&ds));
            prop_assert_eq!(view.len(), ds.len());
        }
    }

    fn all_of(dataset: &Dataset) -> FilterSelection {
        FilterSelection {
            cities: dataset.city_options().into_iter().collect(),
            food_type: FoodTypeChoice::All,
            price_range: (0.0, 1000.0),
        }
    }

    fn names(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|l| l.restaurant.clone()).collect()
    }

    #[test]
    fn full_selection_keeps_every_row() {
        let ds = pizza_and_curry();
        let view = apply_filter(&ds, &all_of(&ds));
        assert_eq!(view.indices(), &[0, 1]);
    }

    #[test]
    fn food_type_is_case_insensitive_substring() {
        let ds = pizza_and_curry();
        let mut sel = all_of(&ds);
        sel.food_type = FoodTypeChoice::Label("italian".into());
        assert_eq!(names(&apply_filter(&ds, &sel)), vec!["Pizza Place"]);

        let ds = Dataset::new(
            vec![
                listing("Wok", "X", "South Chinese, Noodles", 250.0, 4.1),
                listing("Dosa", "X", "South Indian", 120.0, 4.3),
            ],
            Vec::new(),
        );
        let mut sel = all_of(&ds);
        sel.food_type = FoodTypeChoice::Label("Chinese".into());
        assert_eq!(names(&apply_filter(&ds, &sel)), vec!["Wok"]);
    }

    #[test]
    fn empty_city_selection_shows_nothing() {
        let ds = pizza_and_curry();
        let mut sel = all_of(&ds);
        sel.cities.clear();
        assert!(apply_filter(&ds, &sel).is_empty());
    }

    #[test]
    fn price_range_is_inclusive() {
        let ds = pizza_and_curry();
        let mut sel = all_of(&ds);
        sel.price_range = (200.0, 299.0);
        assert_eq!(names(&apply_filter(&ds, &sel)), vec!["Curry House"]);
        sel.price_range = (200.0, 300.0);
        assert_eq!(apply_filter(&ds, &sel).len(), 2);
        sel.price_range = (300.0, 300.0);
        assert_eq!(names(&apply_filter(&ds, &sel)), vec!["Pizza Place"]);
    }

    #[test]
    fn empty_food_type_cell_only_passes_all() {
        let ds = Dataset::new(vec![listing("Blank", "X", "", 100.0, 3.0)], Vec::new());
        let mut sel = all_of(&ds);
        assert_eq!(apply_filter(&ds, &sel).len(), 1);
        sel.food_type = FoodTypeChoice::Label("Pizza".into());
        assert!(apply_filter(&ds, &sel).is_empty());
    }

    #[test]
    fn result_is_subset_satisfying_every_predicate_and_idempotent() {
        let ds = Dataset::new(
            vec![
                listing("a", "Pune", "Pizza, Italian", 150.0, 4.0),
                listing("b", "Delhi", "North Indian", 450.0, 3.9),
                listing("c", "Pune", "Indian, Chinese", 300.0, 4.4),
                listing("d", "Agra", "Sweets", 90.0, 4.6),
                listing("e", "Delhi", "Indian", 600.0, 4.1),
            ],
            Vec::new(),
        );
        let sel = FilterSelection {
            cities: ["Pune", "Delhi"].iter().map(|s| s.to_string()).collect(),
            food_type: FoodTypeChoice::Label("INDIAN".into()),
            price_range: (100.0, 500.0),
        };
        let view = apply_filter(&ds, &sel);
        assert_eq!(names(&view), vec!["b", "c"]);
        for l in view.iter() {
            assert!(sel.cities.contains(&l.city));
            assert!(l.food_type.to_lowercase().contains("indian"));
            assert!(l.price >= 100.0 && l.price <= 500.0);
        }
        assert_eq!(apply_filter(&ds, &sel).indices(), view.indices());
    }

    #[test]
    fn borrowed_view_shares_the_index_list() {
        let ds = pizza_and_curry();
        let cached = vec![1];
        let view = FilteredView::borrowed(&ds, &cached);
        assert!(std::ptr::eq(view.indices().as_ptr(), cached.as_ptr()));
        assert_eq!(names(&view), vec!["Curry House"]);
        assert_eq!(view.into_indices(), vec![1]);
    }

    #[test]
    fn everything_selects_all_cities_and_full_range() {
        let ds = pizza_and_curry();
        let sel = FilterSelection::everything(&ds);
        assert_eq!(sel.food_type, FoodTypeChoice::All);
        assert_eq!(sel.price_range, (200.0, 300.0));
        assert_eq!(apply_filter(&ds, &sel).len(), ds.len());
    }
}
