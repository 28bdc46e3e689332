use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Angular distance between neighbouring slots when `count` slots share a full turn.
pub fn angle_step(count: usize) -> f64 {
    TAU / count as f64
}

/// Evenly spaced points on a circle, starting at `offset` and advancing by `2π / count`.
///
/// Angles follow screen coordinates (y grows downward), so increasing angles run clockwise.
pub fn radial_points(center: Point, radius: f64, count: usize, offset: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let step = angle_step(count);
    (0..count)
        .map(|i| Point::polar(center, radius, offset + i as f64 * step))
        .collect()
}

/// Phrase index shown in `slot` once the phrase list has been shifted by `offset`.
///
/// Returns `None` for an empty list.
pub fn phrase_index(slot: usize, offset: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((slot % count + offset % count) % count)
}

/// Wraps an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Rotation for text sitting tangent to a ring at `anchor_angle`.
///
/// Labels whose anchor lies below the center are turned half a revolution so the glyphs never
/// read upside-down. The result is always within `[-π/2, π/2]`.
pub fn readable_rotation(anchor_angle: f64) -> f64 {
    let anchor = anchor_angle.rem_euclid(TAU);
    let mut rotation = anchor + FRAC_PI_2;
    if anchor > 0.0 && anchor < PI {
        rotation -= PI;
    }
    let rotation = normalize_angle(rotation);
    // rem_euclid can land a hair outside the readable range
    rotation.clamp(-FRAC_PI_2, FRAC_PI_2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self {
            min: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            max: Point::new(center.x + width / 2.0, center.y + height / 2.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Centers of a `columns` x `rows` grid laid over the bounds, in row-major order.
    pub fn cell_centers(&self, columns: usize, rows: usize) -> Vec<Point> {
        let (cw, ch) = (
            self.width() / columns as f64,
            self.height() / rows as f64,
        );
        (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| {
                    Point::new(
                        self.min.x + cw * (col as f64 + 0.5),
                        self.min.y + ch * (row as f64 + 0.5),
                    )
                })
            })
            .collect()
    }
}
