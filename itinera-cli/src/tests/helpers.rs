//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory addressed with UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise test payload");
    write_utf8(path, &payload);
}

/// A hotel ranking request over `total_major` with two affordable hotels
/// and one restaurant.
pub(super) fn rank_payload(total_major: i64) -> Value {
    json!({
        "params": {
            "totalBudget": total_major * 100,
            "groupSize": 2,
            "days": 5,
            "dateRange": { "start": "2026-05-01", "end": "2026-05-06" },
            "preferenceTags": ["central"],
            "anchor": { "lat": 41.3874, "lng": 2.1686 }
        },
        "category": "hotel",
        "candidates": [
            {
                "id": "h-budget",
                "category": "hotel",
                "coords": { "lat": 41.3874, "lng": 2.1686 },
                "estimatedCost": 15_000,
                "tags": ["central"],
                "popularityRating": 4.0
            },
            {
                "id": "h-premium",
                "category": "hotel",
                "coords": { "lat": 41.3874, "lng": 2.1686 },
                "estimatedCost": 30_000,
                "tags": ["central"],
                "popularityRating": 4.0
            },
            {
                "id": "r-tapas",
                "category": "restaurant",
                "coords": { "lat": 41.3874, "lng": 2.1686 },
                "estimatedCost": 2_000,
                "popularityRating": 4.5
            }
        ]
    })
}

/// A route request with a pinned start and two stops listed far-first.
pub(super) fn route_payload() -> Value {
    json!({
        "points": [
            { "name": "Hotel", "latitude": 41.3870, "longitude": 2.1700, "role": "start" },
            { "name": "Far", "latitude": 41.4000, "longitude": 2.1700 },
            { "name": "Near", "latitude": 41.3900, "longitude": 2.1700 }
        ]
    })
}

/// Names of the points in a serialised route, in order.
pub(super) fn point_names(route: &Value) -> Vec<String> {
    route["points"]
        .as_array()
        .expect("points array")
        .iter()
        .map(|point| point["name"].as_str().expect("point name").to_owned())
        .collect()
}
