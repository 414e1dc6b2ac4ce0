use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Listing;
use crate::state::AppState;

const FIXED_COLUMNS: [&str; 5] = ["Restaurant", "City", "Food type", "Price", "Avg ratings"];

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

/// Render the filtered listings as a scrollable table.
pub fn listings_table(ui: &mut Ui, state: &AppState) {
    let Some(view) = state.view() else {
        return;
    };
    let dataset = view.dataset();
    let n_columns = FIXED_COLUMNS.len() + dataset.extra_columns.len();

    ui.push_id("listings_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(280.0)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0).clip(true), n_columns)
            .header(20.0, |mut header| {
                let names = FIXED_COLUMNS
                    .iter()
                    .copied()
                    .chain(dataset.extra_columns.iter().map(String::as_str));
                for name in names {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, view.len(), |mut row| {
                    let listing = &dataset.listings[view.indices()[row.index()]];
                    for cell in row_cells(listing) {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

fn row_cells(listing: &Listing) -> impl Iterator<Item = String> + '_ {
    [
        listing.restaurant.clone(),
        listing.city.clone(),
        listing.food_type.clone(),
        listing.price.to_string(),
        listing.avg_rating.to_string(),
    ]
    .into_iter()
    .chain(listing.extra.iter().cloned())
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Render the four headline metrics, or a warning when nothing matches.
pub fn summary_report(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        ui.label(
            RichText::new("No restaurants found matching your criteria.")
                .color(Color32::from_rgb(230, 160, 30)),
        );
        return;
    };

    let metrics = [
        ("Total Restaurants", summary.count.to_string()),
        ("Average Price (INR)", summary.avg_price_label()),
        ("Average Rating", summary.avg_rating_label()),
        ("Highest Rated Restaurant", summary.highest_rated_label()),
    ];

    ui.columns(metrics.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(metrics.iter()) {
            col.label(*label);
            col.label(RichText::new(value).size(22.0).strong());
        }
    });
}
