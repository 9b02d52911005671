/// Data layer: core types, reading, and writing.
///
/// Architecture:
/// ```text
///  30 header lines + "TIME VALUE COLOR" lines
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  skip header, parse triples → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  time[], value[], color[] (index-aligned)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  same text format back, or CSV
///   └──────────┘
/// ```

pub mod model;
pub mod reader;
pub mod writer;
