use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FoodTypeChoice;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            city_filter(ui, state);
            ui.separator();
            food_type_filter(ui, state);
            ui.separator();
            price_filter(ui, state);
            ui.separator();
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

fn city_filter(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.selection.cities.len();
    let n_total = state.city_options.len();
    let header_text = format!("Select City(s)  ({n_selected}/{n_total})");

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("city_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_cities();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_cities();
                }
            });

            // Clone the options so the state can be mutated inside the loop.
            let cities = state.city_options.clone();
            for city in &cities {
                let mut checked = state.selection.cities.contains(city);
                let text = RichText::new(city).color(state.city_colors.color_for(city));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_city(city);
                }
            }
        });
}

fn food_type_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Food Type");
    let current = state.selection.food_type.clone();
    let mut chosen: Option<FoodTypeChoice> = None;

    egui::ComboBox::from_id_salt("food_type")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == FoodTypeChoice::All, "All")
                .clicked()
            {
                chosen = Some(FoodTypeChoice::All);
            }
            for label in &state.food_type_options {
                let choice = FoodTypeChoice::Label(label.clone());
                if ui.selectable_label(current == choice, label).clicked() {
                    chosen = Some(choice);
                }
            }
        });

    if let Some(choice) = chosen.filter(|c| *c != current) {
        state.set_food_type(choice);
    }
}

fn price_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Price Range (INR)");
    let (min, max) = state.price_bounds;
    let (mut low, mut high) = state.selection.price_range;

    let low_changed = ui
        .add(egui::Slider::new(&mut low, min..=max).text("from").step_by(1.0))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut high, min..=max).text("to").step_by(1.0))
        .changed();

    if low_changed || high_changed {
        // Dragging one handle past the other drags both.
        if low_changed && low > high {
            high = low;
        } else if high_changed && high < low {
            low = high;
        }
        state.set_price_range(low, high);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Swiggy Restaurant Data Dashboard");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} restaurants loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    ui.label("Explore restaurant data with interactive filters and visualizations.");
}
