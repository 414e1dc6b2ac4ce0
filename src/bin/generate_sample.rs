use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One row in the same layout as the Swiggy listings export.
#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "City")]
    city: &'static str,
    #[serde(rename = "Restaurant")]
    restaurant: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Avg ratings")]
    avg_rating: f64,
    #[serde(rename = "Total ratings")]
    total_ratings: u32,
    #[serde(rename = "Food type")]
    food_type: String,
    #[serde(rename = "Delivery time")]
    delivery_time: u32,
}

/// Deterministic splitmix64 generator; the same seed always yields the same file.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

const CITIES: [(&str, &[&str]); 6] = [
    ("Bangalore", &["Koramangala", "Indiranagar", "Jayanagar"]),
    ("Delhi", &["Connaught Place", "Saket", "Karol Bagh"]),
    ("Mumbai", &["Andheri", "Bandra", "Colaba"]),
    ("Hyderabad", &["Banjara Hills", "Gachibowli"]),
    ("Chennai", &["T Nagar", "Adyar", "Velachery"]),
    ("Kolkata", &["Park Street", "Salt Lake"]),
];

const FOOD_TYPES: [&str; 16] = [
    "North Indian",
    "South Indian",
    "Chinese",
    "Biryani",
    "Pizzas",
    "Italian",
    "Fast Food",
    "Desserts",
    "Beverages",
    "Street Food",
    "Mughlai",
    "Tandoor",
    "Snacks",
    "Bakery",
    "Continental",
    "Ice Cream",
];

const NAME_PARTS: [&str; 10] = [
    "Spice", "Tandoor", "Curry", "Masala", "Royal", "Urban", "Dosa", "Wok", "Biryani", "Cafe",
];
const NAME_SUFFIXES: [&str; 6] = ["House", "Kitchen", "Corner", "Express", "Point", "Junction"];

const ROWS: u32 = 400;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = Path::new("data/swiggy.csv");
    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    for id in 0..ROWS {
        let (city, areas) = *rng.pick(&CITIES);
        let area = rng.pick(areas).to_string();

        // 1–3 distinct labels per restaurant
        let n_labels = 1 + rng.below(3);
        let mut labels: Vec<&str> = Vec::with_capacity(n_labels);
        while labels.len() < n_labels {
            let label = *rng.pick(&FOOD_TYPES);
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        let restaurant = format!("{} {}", rng.pick(&NAME_PARTS), rng.pick(&NAME_SUFFIXES));
        let price = (100 + 50 * rng.below(12)) as f64;
        let avg_rating = ((2.5 + rng.next_f64() * 2.4) * 10.0).round() / 10.0;

        writer
            .serialize(SampleRow {
                id: 200 + id,
                area,
                city,
                restaurant,
                price,
                avg_rating,
                total_ratings: 20 + rng.below(5000) as u32,
                food_type: labels.join(","),
                delivery_time: 20 + rng.below(60) as u32,
            })
            .with_context(|| format!("writing row {id}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {ROWS} listings to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs[0], SimpleRng::new(43).next_u64());
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!(rng.below(3) < 3);
            assert!(FOOD_TYPES.contains(rng.pick(&FOOD_TYPES)));
        }
    }
}
