use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Listing};

/// Columns every listings file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Restaurant", "City", "Food type", "Price", "Avg ratings"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("Row {row}, {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// The required columns of one row, numbers still as text so bad cells
/// can be reported with their position.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(rename = "Restaurant")]
    restaurant: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Food type", default)]
    food_type: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Avg ratings")]
    avg_rating: String,
}

/// Load the listings file.
///
/// CSV layout: header row with column names, at least [`REQUIRED_COLUMNS`].
/// Every other column is kept as text in header order for display.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { row: 0, source })?
        .clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let extra_idx: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !REQUIRED_COLUMNS.contains(h))
        .map(|(i, _)| i)
        .collect();
    let extra_columns: Vec<String> = extra_idx.iter().map(|&i| headers[i].to_string()).collect();

    let mut listings = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = row_no + 1;
        let record = result.map_err(|source| LoadError::Csv { row, source })?;
        let raw: RawListing = record
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Csv { row, source })?;

        let price = parse_number(&raw.price, row, "Price")?;
        let avg_rating = parse_number(&raw.avg_rating, row, "Avg ratings")?;
        let extra = extra_idx
            .iter()
            .map(|&i| record.get(i).unwrap_or("").to_string())
            .collect();

        listings.push(Listing {
            restaurant: raw.restaurant,
            city: raw.city,
            food_type: raw.food_type,
            price,
            avg_rating,
            extra,
        });
    }

    Ok(Dataset::new(listings, extra_columns))
}

fn parse_number(s: &str, row: usize, column: &'static str) -> Result<f64, LoadError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidNumber {
            row,
            column,
            value: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_required_and_extra_columns() {
        let file = csv_file(
            "ID,Area,City,Restaurant,Price,Avg ratings,Total ratings,Food type\n\
             211,Koramangala,Bangalore,Tandoor Hut,300.0,4.4,100,\"Biryani,Chinese,North Indian\"\n\
             221,Koramangala,Bangalore,Tea Magic,200.0,3.5,100,\"Cafe,Beverages\"\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.extra_columns, vec!["ID", "Area", "Total ratings"]);

        let first = &ds.listings[0];
        assert_eq!(first.restaurant, "Tandoor Hut");
        assert_eq!(first.city, "Bangalore");
        assert_eq!(first.food_type, "Biryani,Chinese,North Indian");
        assert_eq!(first.price, 300.0);
        assert_eq!(first.avg_rating, 4.4);
        assert_eq!(first.extra, vec!["211", "Koramangala", "100"]);
    }

    #[test]
    fn empty_food_type_is_accepted() {
        let file = csv_file("Restaurant,City,Food type,Price,Avg ratings\nPlain,Pune,,150,3.9\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.listings[0].food_type, "");
        assert!(ds.food_type_options().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let file = csv_file("Restaurant,City,Price,Avg ratings\nA,Pune,100,4.0\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Food type")));
    }

    #[test]
    fn non_numeric_price_names_row_and_value() {
        let file = csv_file(
            "Restaurant,City,Food type,Price,Avg ratings\n\
             A,Pune,Snacks,100,4.0\n\
             B,Pune,Snacks,cheap,4.1\n",
        );
        match load_csv(file.path()).unwrap_err() {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Price");
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_rating_is_rejected() {
        let file = csv_file("Restaurant,City,Food type,Price,Avg ratings\nA,Pune,Snacks,100,NaN\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { column: "Avg ratings", .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
