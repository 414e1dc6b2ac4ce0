/// Data layer: listing types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///      swiggy.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Listing>, immutable after load
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city → food type → price → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  summary, top food types, city counts
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
