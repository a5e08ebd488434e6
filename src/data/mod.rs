/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  ontology.json          .csv / .json / .parquet / *_segments.csv
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                  ┌──────────┐
///   │  loader   │                  │  loader   │  parse file → LabelColumn / Segment
///   └──────────┘                  └──────────┘
///        │                               │
///        ▼                               ▼
///   Vec<OntologyEntry>            ┌─────────────┐
///                                 │ LabelColumn │  indexed "A|B|C" strings
///                                 └─────────────┘
///                                        │
///                                        ▼
///                                 ┌──────────┐
///                                 │  filter   │  keep rows containing a label
///                                 └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
