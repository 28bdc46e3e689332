use super::animation::{Frame, Viewport};
use super::geometry::Point;
use super::render_list::DrawList;
use super::scene;
use crate::config::{Config, ScaleMode};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

pub struct State {
    pub config: Config,
    pub viewport: Viewport,
    pub pointer: Option<Point>,
    /// Seconds since the first frame.
    pub time: f64,
    started_at: Option<i64>,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            pointer: None,
            time: 0.0,
            started_at: None,
        }
    }

    /// A state frozen at `time`, for rendering outside of a frame clock.
    pub fn still(config: Config, viewport: Viewport, time: f64) -> Self {
        Self {
            viewport,
            time,
            ..Self::new(config)
        }
    }

    /// Moves the clock to a frame-clock timestamp in microseconds. The first timestamp seen
    /// becomes time zero. Returns whether the time changed.
    pub fn advance(&mut self, frame_time: i64) -> bool {
        let start = *self.started_at.get_or_insert(frame_time);
        let time = (frame_time - start) as f64 / MICROS_PER_SECOND;
        let changed = time != self.time;
        self.time = time;
        changed
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let viewport = Viewport::new(width, height);
        let changed = viewport != self.viewport;
        self.viewport = viewport;
        changed
    }

    /// Records the pointer. Returns whether the figure depends on it.
    pub fn update_pointer(&mut self, pointer: Point) -> bool {
        self.pointer = Some(pointer);
        self.config.scale.mode == ScaleMode::Pointer
    }

    pub fn clear_pointer(&mut self) -> bool {
        self.pointer.take().is_some() && self.config.scale.mode == ScaleMode::Pointer
    }

    pub fn reload(&mut self, config: Config) {
        self.config = config;
    }

    pub fn frame(&self) -> Frame {
        Frame::at(self.time, self.viewport, self.pointer, &self.config)
    }

    pub fn compose(&self) -> DrawList {
        scene::compose(&self.frame(), &self.config.fonts)
    }
}
