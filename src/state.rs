use std::path::Path;

use anyhow::{Context, Result};

use crate::color::CityColors;
use crate::data::aggregate::{
    compute_category_aggregate, compute_city_counts, compute_summary, CategoryRating, CityCount,
    SummaryStats,
};
use crate::data::filter::{apply_filter, FilterSelection, FilteredView, FoodTypeChoice};
use crate::data::loader::load_csv;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None if the startup load failed).
    pub dataset: Option<Dataset>,

    /// Distinct cities, first-seen order.
    pub city_options: Vec<String>,

    /// Distinct food type labels, sorted.
    pub food_type_options: Vec<String>,

    /// Observed price range, the limits of the price sliders.
    pub price_bounds: (f64, f64),

    /// Current filter selection.
    pub selection: FilterSelection,

    /// Indices of listings passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Summary of the visible listings, `None` when nothing matches.
    pub summary: Option<SummaryStats>,

    /// Top food types by mean rating.
    pub categories: Vec<CategoryRating>,

    /// Visible listings per city.
    pub city_counts: Vec<CityCount>,

    pub city_colors: CityColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the listings file, keeping the error as a status message on failure.
    pub fn load(path: &Path) -> Self {
        let mut state = AppState::default();
        match try_load(path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load listings: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
        state
    }

    /// Ingest the dataset, derive the selector options and select everything.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.city_options = dataset.city_options();
        self.food_type_options = dataset.food_type_options();
        self.price_bounds = dataset.price_bounds().unwrap_or((0.0, 0.0));
        self.city_colors = CityColors::new(&self.city_options);
        self.selection = FilterSelection::everything(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh();
    }

    /// The current view over the dataset, if one is loaded.
    pub fn view(&self) -> Option<FilteredView<'_>> {
        self.dataset
            .as_ref()
            .map(|ds| FilteredView::borrowed(ds, &self.visible_indices))
    }

    /// Recompute the view and everything derived from it.
    pub fn refresh(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let view = apply_filter(ds, &self.selection);
        self.summary = compute_summary(&view);
        self.categories = compute_category_aggregate(&view);
        self.city_counts = compute_city_counts(&view);
        log::debug!(
            "Filter {:?} / {} / {:?} matched {} of {} listings",
            self.selection.cities,
            self.selection.food_type,
            self.selection.price_range,
            view.len(),
            ds.len()
        );
        self.visible_indices = view.into_indices();
    }

    /// Toggle a single city in the selection.
    pub fn toggle_city(&mut self, city: &str) {
        if !self.selection.cities.remove(city) {
            self.selection.cities.insert(city.to_string());
        }
        self.refresh();
    }

    /// Select every city.
    pub fn select_all_cities(&mut self) {
        self.selection.cities = self.city_options.iter().cloned().collect();
        self.refresh();
    }

    /// Deselect every city.
    pub fn select_no_cities(&mut self) {
        self.selection.cities.clear();
        self.refresh();
    }

    pub fn set_food_type(&mut self, choice: FoodTypeChoice) {
        self.selection.food_type = choice;
        self.refresh();
    }

    /// Set the price range, clamped to the observed bounds with `low <= high`.
    pub fn set_price_range(&mut self, low: f64, high: f64) {
        let (min, max) = self.price_bounds;
        let low = low.clamp(min, max);
        let high = high.clamp(low, max);
        self.selection.price_range = (low, high);
        self.refresh();
    }

    /// Back to the default selection.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection = FilterSelection::everything(ds);
            self.refresh();
        }
    }
}

fn try_load(path: &Path) -> Result<Dataset> {
    let dataset =
        load_csv(path).with_context(|| format!("loading listings from {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has a header but no listings", path.display());
    }
    log::info!(
        "Loaded {} listings ({} cities) with extra columns {:?}",
        dataset.len(),
        dataset.city_options().len(),
        dataset.extra_columns
    );
    Ok(dataset)
}
