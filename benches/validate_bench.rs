//! Criterion benchmarks for the layout engine.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forecourt::layout::validate_layout;
use forecourt::request::LayoutRequest;
use forecourt::rules::RuleTable;

/// Canonical highway site: the search lands on the third row gap.
const CANONICAL_JSON: &str = r#"{
  "plot": { "width": 30, "depth": 40 },
  "roadType": "NH",
  "salesBuilding": {
    "type": "SB Type 3",
    "orientation": "front",
    "position": "front_center",
    "entrySide": "road"
  },
  "tanks": { "count": 2, "installationType": "Earth Pit" },
  "mpds": { "count": 4 }
}"#;

/// Worst case: every row gap, zone, anchor, and step is tried and fails.
const EXHAUSTION_JSON: &str = r#"{
  "plot": { "width": 12, "depth": 30 },
  "roadType": "City",
  "salesBuilding": {
    "type": "SB Type 3",
    "orientation": "front",
    "position": "front_center",
    "entrySide": "road"
  },
  "tanks": { "count": 0 },
  "mpds": { "count": 2 }
}"#;

fn bench_validate(c: &mut Criterion) {
    let rules = RuleTable::default();
    let canonical: LayoutRequest = serde_json::from_str(CANONICAL_JSON).unwrap();
    let exhaustion: LayoutRequest = serde_json::from_str(EXHAUSTION_JSON).unwrap();

    c.bench_function("validate_canonical_site", |b| {
        b.iter(|| validate_layout(black_box(&canonical), &rules))
    });

    c.bench_function("validate_search_exhaustion", |b| {
        b.iter(|| validate_layout(black_box(&exhaustion), &rules))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
