use super::geometry::{Bounds, Point, angle_step, phrase_index, radial_points, readable_rotation};
use super::render_list::{Align, DrawCommand, DrawList, Font, PlacedLabel};
use super::{ENNEAGRAM_HEXAD, ENNEAGRAM_POINTS, ENNEAGRAM_TRIANGLE, TITLE_BOX, TITLE_ROWS, TOP};
use crate::config::FontConfig;

/// Anchors closer than this to the vertical axis count as centered.
const AXIS_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelSize {
    Fixed(f64),
    /// Half the band's thickness.
    Auto,
}

#[derive(Debug, Clone)]
pub struct LabelRing<'a> {
    pub phrases: &'a [&'a str],
    pub size: LabelSize,
    pub inner: f64,
    pub outer: f64,
    pub angle_offset: f64,
    pub index_offset: usize,
}

#[derive(Debug, Clone)]
pub struct LabelColumn<'a> {
    pub phrases: &'a [&'a str],
    pub size: f64,
    pub radius: f64,
    pub angle_offset: f64,
    pub index_offset: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Spokes {
    pub count: usize,
    pub inner: f64,
    pub outer: f64,
    pub phase: f64,
}

#[derive(Debug, Clone)]
pub struct Title<'a> {
    pub title: &'a str,
    pub subtitles: &'a [(usize, &'a str)],
    pub title_size: f64,
    pub subtitle_size: f64,
}

/// Collects the drawing commands of one frame. Radii handed to the renderers are fractions of
/// `scale`; everything is positioned around `center`.
pub struct RenderContext<'a> {
    center: Point,
    scale: f64,
    fonts: &'a FontConfig,
    list: DrawList,
}

impl<'a> RenderContext<'a> {
    pub fn new(center: Point, scale: f64, fonts: &'a FontConfig) -> Self {
        Self {
            center,
            scale,
            fonts,
            list: DrawList::new(),
        }
    }

    pub fn finish(self) -> DrawList {
        self.list
    }

    pub fn rings(&mut self, radii: &[f64]) {
        for radius in radii {
            self.list.push(DrawCommand::Circle {
                center: self.center,
                radius: radius * self.scale,
            });
        }
    }

    pub fn enneagram(&mut self, radius: f64) {
        let vertices = radial_points(self.center, radius * self.scale, ENNEAGRAM_POINTS, TOP);
        for path in [&ENNEAGRAM_TRIANGLE[..], &ENNEAGRAM_HEXAD[..]] {
            self.list.push(DrawCommand::Polyline {
                points: path.iter().map(|&i| vertices[i]).collect(),
                closed: true,
            });
        }
    }

    pub fn divisions(&mut self, spokes: Spokes) {
        let at = |radius: f64| {
            radial_points(self.center, radius * self.scale, spokes.count, spokes.phase)
        };
        for (from, to) in at(spokes.inner).into_iter().zip(at(spokes.outer)) {
            self.list.push(DrawCommand::Line { from, to });
        }
    }

    pub fn title(&mut self, title: &Title) {
        let (w, h) = TITLE_BOX;
        let cells = Bounds::from_center(self.center, w * self.scale, h * self.scale)
            .cell_centers(1, TITLE_ROWS);

        let title_font = Font::new(&self.fonts.title, title.title_size);
        let subtitle_font = Font::new(&self.fonts.title, title.subtitle_size);

        let lines = std::iter::once((0, title.title, &title_font)).chain(
            title
                .subtitles
                .iter()
                .map(|&(row, text)| (row, text, &subtitle_font)),
        );
        for (row, text, font) in lines {
            if let Some(&anchor) = cells.get(row) {
                self.push_label(text, anchor, 0.0, font.clone(), Align::Center);
            }
        }
    }

    pub fn label_ring(&mut self, ring: &LabelRing) {
        let count = ring.phrases.len();
        if count == 0 {
            return;
        }
        let step = angle_step(count);
        let size = match ring.size {
            LabelSize::Fixed(size) => size,
            LabelSize::Auto => 0.5 * (ring.outer - ring.inner) * self.scale,
        };
        let font = Font::new(&self.fonts.label, size);
        let radius = (ring.inner + ring.outer) / 2.0 * self.scale;

        for (slot, anchor) in radial_points(self.center, radius, count, ring.angle_offset)
            .into_iter()
            .enumerate()
        {
            let Some(text) = resolve_phrase(ring.phrases, slot, ring.index_offset) else {
                continue;
            };
            let rotation = readable_rotation(slot as f64 * step + ring.angle_offset);
            self.push_label(text, anchor, rotation, font.clone(), Align::Center);
        }
    }

    pub fn label_column(&mut self, column: &LabelColumn) {
        let count = column.phrases.len();
        let font = Font::new(&self.fonts.label, column.size);

        for (slot, anchor) in radial_points(
            self.center,
            column.radius * self.scale,
            count,
            column.angle_offset,
        )
        .into_iter()
        .enumerate()
        {
            let Some(text) = resolve_phrase(column.phrases, slot, column.index_offset) else {
                continue;
            };
            let align = self.outward_align(anchor);
            self.push_label(text, anchor, 0.0, font.clone(), align);
        }
    }

    fn outward_align(&self, anchor: Point) -> Align {
        let dx = anchor.x - self.center.x;
        if dx.abs() < AXIS_TOLERANCE {
            Align::Center
        } else if dx < 0.0 {
            Align::Right
        } else {
            Align::Left
        }
    }

    fn push_label(&mut self, text: &str, anchor: Point, rotation: f64, font: Font, align: Align) {
        self.list.push(DrawCommand::Label(PlacedLabel {
            text: text.to_string(),
            anchor,
            rotation,
            font,
            align,
        }));
    }
}

/// Phrase for `slot` after shifting by `offset`, or `None` when that entry is blank.
fn resolve_phrase<'p>(phrases: &[&'p str], slot: usize, offset: usize) -> Option<&'p str> {
    phrase_index(slot, offset, phrases.len())
        .and_then(|i| phrases.get(i))
        .copied()
        .filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn fonts() -> FontConfig {
        FontConfig::default()
    }

    fn ring<'a>(phrases: &'a [&'a str], index_offset: usize) -> LabelRing<'a> {
        LabelRing {
            phrases,
            size: LabelSize::Fixed(8.0),
            inner: 0.75,
            outer: 0.8,
            angle_offset: 0.0,
            index_offset,
        }
    }

    fn texts(list: &DrawList) -> Vec<&str> {
        list.labels().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_label_ring_index_offset() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::default(), 100.0, &fonts);
        ctx.label_ring(&ring(&["A", "B", "C"], 1));
        let list = ctx.finish();

        let labels: Vec<_> = list.labels().collect();
        assert_eq!(texts(&list), vec!["B", "C", "A"]);
        let anchors = radial_points(Point::default(), 77.5, 3, 0.0);
        for (label, anchor) in labels.iter().zip(anchors) {
            assert!(label.anchor.distance(anchor) < 1e-9);
            assert_eq!(label.align, Align::Center);
        }
    }

    #[test]
    fn test_label_ring_skips_blank_phrases() {
        let fonts = fonts();
        for offset in 0..6 {
            let mut ctx = RenderContext::new(Point::new(10.0, 10.0), 50.0, &fonts);
            ctx.label_ring(&ring(&["", "X", ""], offset));
            let list = ctx.finish();
            assert_eq!(texts(&list), vec!["X"], "offset {offset}");

            // "X" lands on the slot whose shifted index points at it
            let slot = (0..3).find(|&s| phrase_index(s, offset, 3) == Some(1)).unwrap();
            let expected = radial_points(Point::new(10.0, 10.0), 38.75, 3, 0.0)[slot];
            let label = list.labels().next().unwrap();
            assert!(label.anchor.distance(expected) < 1e-9);
        }
    }

    #[test]
    fn test_label_ring_rotation_is_readable() {
        let fonts = fonts();
        let phrases = ["a"; 36];
        let mut ctx = RenderContext::new(Point::default(), 400.0, &fonts);
        ctx.label_ring(&LabelRing {
            angle_offset: 0.37,
            ..ring(&phrases, 5)
        });
        let list = ctx.finish();
        assert_eq!(list.len(), 36);
        for label in list.labels() {
            assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&label.rotation));
        }
    }

    #[test]
    fn test_label_ring_auto_size() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::default(), 400.0, &fonts);
        ctx.label_ring(&LabelRing {
            size: LabelSize::Auto,
            inner: 0.6,
            outer: 0.65,
            ..ring(&["x"], 0)
        });
        let list = ctx.finish();
        let label = list.labels().next().unwrap();
        assert!((label.font.size - 10.0).abs() < 1e-9);
        assert_eq!(label.font.family, fonts.label);
    }

    #[test]
    fn test_label_column_alignment() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::new(200.0, 200.0), 100.0, &fonts);
        ctx.label_column(&LabelColumn {
            phrases: &["top", "right", "bottom", "left"],
            size: 7.0,
            radius: 1.0,
            angle_offset: -FRAC_PI_2,
            index_offset: 0,
        });
        let list = ctx.finish();
        let aligns: Vec<_> = list.labels().map(|l| (l.text.as_str(), l.align)).collect();
        assert_eq!(
            aligns,
            vec![
                ("top", Align::Center),
                ("right", Align::Left),
                ("bottom", Align::Center),
                ("left", Align::Right),
            ]
        );
        assert!(list.labels().all(|l| l.rotation == 0.0));
    }

    #[test]
    fn test_outward_align_axis_tolerance() {
        let fonts = fonts();
        let ctx = RenderContext::new(Point::new(200.0, 200.0), 100.0, &fonts);
        assert_eq!(ctx.outward_align(Point::new(200.0 + 1e-12, 90.0)), Align::Center);
        assert_eq!(ctx.outward_align(Point::new(200.0 - 1e-12, 310.0)), Align::Center);
        assert_eq!(ctx.outward_align(Point::new(200.0 + 1e-7, 90.0)), Align::Left);
        assert_eq!(ctx.outward_align(Point::new(200.0 - 1e-7, 90.0)), Align::Right);
    }

    #[test]
    fn test_label_column_ragged() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::default(), 100.0, &fonts);
        ctx.label_column(&LabelColumn {
            phrases: &["", "NE", "", "SE", "", "SW", "", "NW"],
            size: 7.0,
            radius: 1.0,
            angle_offset: -FRAC_PI_2,
            index_offset: 2,
        });
        let list = ctx.finish();
        assert_eq!(texts(&list), vec!["SE", "SW", "NW", "NE"]);
    }

    #[test]
    fn test_enneagram_paths() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::default(), 100.0, &fonts);
        ctx.enneagram(1.0);
        let list = ctx.finish();
        let vertices = radial_points(Point::default(), 100.0, 9, TOP);

        let paths: Vec<_> = list
            .iter()
            .map(|c| match c {
                DrawCommand::Polyline { points, closed } => {
                    assert!(*closed);
                    points.clone()
                }
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], vec![vertices[0], vertices[3], vertices[6]]);
        assert_eq!(paths[1].len(), 6);
        assert_eq!(paths[1][0], vertices[5]);
        // vertex 0 is at the top
        assert!(paths[0][0].distance(Point::new(0.0, -100.0)) < 1e-9);
    }

    #[test]
    fn test_divisions_are_radial() {
        let fonts = fonts();
        let center = Point::new(5.0, 5.0);
        let mut ctx = RenderContext::new(center, 10.0, &fonts);
        ctx.divisions(Spokes {
            count: 12,
            inner: 0.65,
            outer: 0.75,
            phase: TOP,
        });
        let list = ctx.finish();
        assert_eq!(list.len(), 12);
        for command in &list {
            let DrawCommand::Line { from, to } = command else {
                panic!("expected a line, got {command:?}");
            };
            assert!((from.distance(center) - 6.5).abs() < 1e-9);
            assert!((to.distance(center) - 7.5).abs() < 1e-9);
            let (a, b) = (
                (from.y - center.y).atan2(from.x - center.x),
                (to.y - center.y).atan2(to.x - center.x),
            );
            assert!(((a - b + PI).rem_euclid(2.0 * PI) - PI).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rings_scale() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::default(), 400.0, &fonts);
        ctx.rings(&[0.5, 1.0]);
        let list = ctx.finish();
        assert_eq!(
            list.iter().cloned().collect::<Vec<_>>(),
            vec![
                DrawCommand::Circle {
                    center: Point::default(),
                    radius: 200.0
                },
                DrawCommand::Circle {
                    center: Point::default(),
                    radius: 400.0
                },
            ]
        );
    }

    #[test]
    fn test_title_rows() {
        let fonts = fonts();
        let mut ctx = RenderContext::new(Point::new(0.0, 0.0), 400.0, &fonts);
        ctx.title(&Title {
            title: "T",
            subtitles: &[(2, "two"), (9, "nine"), (42, "missing")],
            title_size: 24.0,
            subtitle_size: 14.0,
        });
        let list = ctx.finish();
        let labels: Vec<_> = list.labels().collect();
        assert_eq!(labels.len(), 3);
        // 140px tall box split into 14px rows, centered on the origin
        assert!((labels[0].anchor.y - -63.0).abs() < 1e-9);
        assert!((labels[1].anchor.y - -35.0).abs() < 1e-9);
        assert!((labels[2].anchor.y - 63.0).abs() < 1e-9);
        assert_eq!(labels[0].font.size, 24.0);
        assert_eq!(labels[2].font.size, 14.0);
    }
}
