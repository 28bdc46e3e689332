use super::VIEWPORT_FILL;
use super::geometry::Point;
use crate::config::{AnimationConfig, Config, ScaleConfig, ScaleMode};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the largest circle that fits the viewport.
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

/// Position of `time` within the current period, in `[0, 1)`.
pub fn phase(time: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    time.rem_euclid(period) / period
}

/// Rises from 0 to 1 over the first half of the phase and falls back over the second.
pub fn triangle(phase: f64) -> f64 {
    1.0 - (2.0 * phase - 1.0).abs()
}

pub fn smoothstep(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// A clock that advances one `step` per period. Each period rests first and then eases from 0
/// to 1 during its final `motion` share.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cycle {
    pub step: u64,
    pub ease: f64,
}

impl Cycle {
    pub fn at(time: f64, period: f64, motion: f64) -> Self {
        if period <= 0.0 {
            return Self::default();
        }
        let motion = motion.clamp(0.0, 1.0);
        let step = (time / period).floor().max(0.0) as u64;
        let ease = if motion > 0.0 {
            smoothstep((phase(time, period) - (1.0 - motion)) / motion)
        } else {
            0.0
        };
        Self { step, ease }
    }

    /// Step folded onto a band of `count` slots.
    pub fn index(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        (self.step % count as u64) as usize
    }
}

/// Everything a frame needs from the clock, computed from scratch for each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub center: Point,
    pub scale: f64,
    pub time: f64,
    /// Breathing value in `[0, 1]`, also used to pulse the title.
    pub breath: f64,
    pub tick: Cycle,
    pub sweep: Cycle,
}

impl Frame {
    pub fn at(time: f64, viewport: Viewport, pointer: Option<Point>, config: &Config) -> Self {
        let AnimationConfig {
            breath_period,
            breath_min,
            breath_max,
            tick_period,
            tick_motion,
            sweep_period,
            sweep_motion,
        } = config.animation;

        let breath = triangle(phase(time, breath_period));
        let scale =
            base_scale(&config.scale, viewport, pointer) * lerp(breath_min, breath_max, breath);

        Self {
            center: viewport.center(),
            scale,
            time,
            breath,
            tick: Cycle::at(time, tick_period, tick_motion),
            sweep: Cycle::at(time, sweep_period, sweep_motion),
        }
    }
}

/// Scale before breathing is applied.
///
/// In pointer mode the scale is the plain distance from the pointer to the center, so the
/// outer unit circle follows the pointer.
pub fn base_scale(config: &ScaleConfig, viewport: Viewport, pointer: Option<Point>) -> f64 {
    let fit = viewport.radius() * VIEWPORT_FILL;
    match config.mode {
        ScaleMode::Fixed => config.fixed,
        ScaleMode::Viewport => fit,
        ScaleMode::Pointer => pointer.map_or(fit, |p| p.distance(viewport.center())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_phase_bounds() {
        for i in -100..100 {
            let t = i as f64 * 0.37;
            let p = phase(t, 6.0);
            assert!((0.0..1.0).contains(&p), "phase({t}) = {p}");
        }
        assert_eq!(phase(12.0, 0.0), 0.0);
    }

    #[test]
    fn test_triangle_shape() {
        assert!(triangle(0.0).abs() < EPS);
        assert!((triangle(0.5) - 1.0).abs() < EPS);
        assert!((triangle(0.25) - 0.5).abs() < EPS);
        assert!((triangle(0.75) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_cycle_rests_then_moves() {
        // 4s period, moving during the last second
        let resting = Cycle::at(9.5, 4.0, 0.25);
        assert_eq!(resting.step, 2);
        assert_eq!(resting.ease, 0.0);

        let midway = Cycle::at(11.5, 4.0, 0.25);
        assert_eq!(midway.step, 2);
        assert!((midway.ease - 0.5).abs() < EPS);

        let almost = Cycle::at(11.999_999, 4.0, 0.25);
        assert!(almost.ease > 0.99);

        let next = Cycle::at(12.0, 4.0, 0.25);
        assert_eq!(next.step, 3);
        assert_eq!(next.ease, 0.0);
    }

    #[test]
    fn test_cycle_index_wraps() {
        let cycle = Cycle::at(3.0 * 14.0 + 0.1, 3.0, 0.2);
        assert_eq!(cycle.step, 14);
        assert_eq!(cycle.index(12), 2);
        assert_eq!(cycle.index(36), 14);
        assert_eq!(cycle.index(0), 0);
    }

    #[test]
    fn test_cycle_degenerate_period() {
        assert_eq!(Cycle::at(5.0, 0.0, 0.5), Cycle::default());
        assert_eq!(Cycle::at(-5.0, 2.0, 0.5).step, 0);
    }

    #[test]
    fn test_frame_breathing_bounds() {
        let config = Config::default();
        let viewport = Viewport::new(1000.0, 800.0);
        let fit = 400.0 * VIEWPORT_FILL;
        for i in 0..200 {
            let frame = Frame::at(i as f64 * 0.1, viewport, None, &config);
            assert!(frame.scale >= fit * config.animation.breath_min - EPS);
            assert!(frame.scale <= fit * config.animation.breath_max + EPS);
            assert_eq!(frame.center, Point::new(500.0, 400.0));
        }
    }

    #[test]
    fn test_frame_is_pure() {
        let config = Config::default();
        let viewport = Viewport::new(640.0, 480.0);
        assert_eq!(
            Frame::at(17.25, viewport, None, &config),
            Frame::at(17.25, viewport, None, &config)
        );
    }

    #[test]
    fn test_base_scale_modes() {
        let viewport = Viewport::new(200.0, 100.0);
        let pointer = Some(Point::new(130.0, 90.0));

        let mut config = ScaleConfig::default();
        config.mode = ScaleMode::Fixed;
        config.fixed = 400.0;
        assert_eq!(base_scale(&config, viewport, pointer), 400.0);

        config.mode = ScaleMode::Viewport;
        assert!((base_scale(&config, viewport, pointer) - 50.0 * VIEWPORT_FILL).abs() < EPS);

        config.mode = ScaleMode::Pointer;
        assert!((base_scale(&config, viewport, pointer) - 50.0).abs() < EPS);
        assert!((base_scale(&config, viewport, None) - 50.0 * VIEWPORT_FILL).abs() < EPS);
    }
}
