use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;
const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);

// ---------------------------------------------------------------------------
// Bar charts (central panel)
// ---------------------------------------------------------------------------

/// Render both charts, or a note when the view is empty.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.visible_indices.is_empty() {
        ui.label("No data available for visualizations with the current filters.");
        return;
    }

    ui.strong("Count of Restaurants per City");
    city_count_chart(ui, state);

    ui.add_space(8.0);
    ui.strong("Top 10 Food Types by Average Rating");
    if state.categories.is_empty() {
        ui.label("No food types to visualize with current filters.");
    } else {
        food_type_chart(ui, state);
    }
}

fn city_count_chart(ui: &mut Ui, state: &AppState) {
    let labels: Vec<String> = state.city_counts.iter().map(|c| c.city.clone()).collect();
    let bars: Vec<Bar> = state
        .city_counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.listings as f64)
                .name(&c.city)
                .fill(state.city_colors.color_for(&c.city))
                .width(0.6)
        })
        .collect();

    Plot::new("city_counts")
        .height(CHART_HEIGHT)
        .y_axis_label("Number of Restaurants")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark))
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Restaurants"));
        });
}

fn food_type_chart(ui: &mut Ui, state: &AppState) {
    let labels: Vec<String> = state.categories.iter().map(|c| c.label.clone()).collect();
    let bars: Vec<Bar> = state
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.mean_rating)
                .name(format!("{} ({} listings)", c.label, c.listings))
                .width(0.6)
        })
        .collect();

    Plot::new("food_type_ratings")
        .height(CHART_HEIGHT)
        .x_axis_label("Food Type")
        .y_axis_label("Average Rating")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark))
        .include_y(0.0)
        .include_y(5.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(SKY_BLUE).name("Average Rating"));
        });
}

/// Label integer grid marks with the category at that bar position.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let pos = mark.value.round();
    if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
        return String::new();
    }
    labels.get(pos as usize).cloned().unwrap_or_default()
}
