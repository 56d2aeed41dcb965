use crate::error::{SkResult, SwipeKeyError};
use crate::keys::Key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dist(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// On-disk layout definition: rows of keys plus the unit key size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub name: String,
    pub key_width: f32,
    pub key_height: f32,
    pub rows: Vec<Vec<Key>>,
}

/// Character -> key-center mapping derived from a layout's row geometry.
///
/// Only lowercase alphabetic keys are addressable; everything the gesture
/// matcher needs (centers plus the unit key dimensions for the endpoint
/// filter) lives here, the full row metadata stays in `LayoutDefinition`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLayout {
    key_centers: HashMap<char, Point>,
    pub key_width: f32,
    pub key_height: f32,
}

impl KeyLayout {
    /// Computes key centers from rows laid out top to bottom. A key's x span
    /// is its width in layout units times the unit key width; rows are one
    /// unit key height apart.
    pub fn from_rows(rows: &[Vec<Key>], key_width: f32, key_height: f32) -> Self {
        let mut key_centers = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            let y = r as f32 * key_height;
            let mut x = 0.0;
            for key in row {
                let w = key.width * key_width;
                if let Some(c) = key.character() {
                    if c.is_alphabetic() {
                        let c = c.to_ascii_lowercase();
                        key_centers.insert(c, Point::new(x + w * 0.5, y + key_height * 0.5));
                    }
                }
                x += w;
            }
        }
        Self {
            key_centers,
            key_width,
            key_height,
        }
    }

    /// Builds a layout directly from a key-center map, for callers that
    /// already computed their geometry.
    pub fn from_centers(key_centers: HashMap<char, Point>, key_width: f32, key_height: f32) -> Self {
        Self {
            key_centers,
            key_width,
            key_height,
        }
    }

    pub fn from_definition(def: &LayoutDefinition) -> Self {
        Self::from_rows(&def.rows, def.key_width, def.key_height)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SkResult<Self> {
        let content = fs::read_to_string(&path)?;
        let def: LayoutDefinition = serde_json::from_str(&content)?;
        if def.key_width <= 0.0 || def.key_height <= 0.0 {
            return Err(SwipeKeyError::Layout(format!(
                "Layout '{}' has non-positive key dimensions",
                def.name
            )));
        }
        Ok(Self::from_definition(&def))
    }

    pub fn key_center(&self, c: char) -> Option<Point> {
        self.key_centers.get(&c.to_ascii_lowercase()).copied()
    }

    pub fn key_count(&self) -> usize {
        self.key_centers.len()
    }
}

/// Per-letter key centers for `word`, in order. `None` when any character
/// has no key-center mapping; such a word is not gesture-eligible.
pub fn keyboard_path(word: &str, layout: &KeyLayout) -> Option<Vec<Point>> {
    word.chars().map(|c| layout.key_center(c)).collect()
}

/// Total polyline length: sum of consecutive Euclidean segment lengths.
pub fn path_length(path: &[Point]) -> f32 {
    path.windows(2).map(|w| w[0].dist(&w[1])).sum()
}

/// Exactly `n` points evenly spaced by arc length along `path`, linearly
/// interpolated between the two original points bracketing each target
/// position. A path of zero length yields its first point `n` times.
pub fn resample(path: &[Point], n: usize) -> Vec<Point> {
    if n == 0 || path.is_empty() {
        return Vec::new();
    }
    if path.len() == 1 || n == 1 {
        return vec![path[0]; n];
    }

    // Cumulative arc length per vertex; cum[i] is the length up to path[i].
    let mut cum = Vec::with_capacity(path.len());
    let mut running = 0.0f32;
    cum.push(running);
    for w in path.windows(2) {
        running += w[0].dist(&w[1]);
        cum.push(running);
    }
    let total = running;
    if total <= f32::EPSILON {
        return vec![path[0]; n];
    }

    let mut points = Vec::with_capacity(n);
    for k in 0..n {
        let target = (k as f32 * total / (n - 1) as f32).min(total);
        // First segment whose far end reaches the target arc length.
        let mut i = cum.partition_point(|&l| l < target);
        i = i.clamp(1, path.len() - 1);
        let seg = cum[i] - cum[i - 1];
        let t = if seg <= f32::EPSILON {
            0.0
        } else {
            (target - cum[i - 1]) / seg
        };
        points.push(Point::new(
            path[i - 1].x + t * (path[i].x - path[i - 1].x),
            path[i - 1].y + t * (path[i].y - path[i - 1].y),
        ));
    }
    points
}
