/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → infer dtypes → normalize date columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ DataTable │  Vec<Column>, pure derived queries (head, nulls, select)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  histogram, density, correlation, value counts
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
