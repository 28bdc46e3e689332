use std::f64::consts::FRAC_PI_2;

pub mod animation;
pub mod figure;
pub mod geometry;
pub mod labels;
pub mod model;
pub mod render_list;
pub mod scene;
pub mod view;

pub use animation::{Cycle, Frame, Viewport};
pub use geometry::Point;
pub use model::State;
pub use render_list::{DrawCommand, DrawList};
pub use view::draw;

/// Band boundaries as fractions of the frame scale.
pub const RING_RADII: [f64; 5] = [0.65, 0.70, 0.75, 0.80, 0.85];
pub const SIGN_COUNT: usize = 12;
pub const HALF_SIGN: f64 = std::f64::consts::TAU * 0.5 / SIGN_COUNT as f64;
/// Slot 0 of the enneagram and the divisions sits at the top.
pub const TOP: f64 = -FRAC_PI_2;
pub const ENNEAGRAM_POINTS: usize = 9;
pub const ENNEAGRAM_TRIANGLE: [usize; 3] = [0, 3, 6];
pub const ENNEAGRAM_HEXAD: [usize; 6] = [5, 7, 1, 4, 2, 8];
pub const ASPECT_RADIUS: f64 = 0.87;
pub const QUADRANT_RADIUS: f64 = 0.97;
pub const TITLE_BOX: (f64, f64) = (0.75, 0.35);
pub const TITLE_ROWS: usize = 10;
/// Share of half the viewport's short side covered by one unit of scale.
pub const VIEWPORT_FILL: f64 = 0.8;
