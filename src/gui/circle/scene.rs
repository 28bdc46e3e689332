use super::animation::Frame;
use super::figure::{LabelColumn, LabelRing, LabelSize, RenderContext, Spokes, Title};
use super::geometry::angle_step;
use super::labels::{
    ACTIONS, ASPECTS, ELEMENTS, GENDERS, QUADRANTS, QUALITIES, SUBTITLES, TITLE, ZODIAC_SYMBOLS,
    ZODIAC_THEMES,
};
use super::render_list::DrawList;
use super::{ASPECT_RADIUS, HALF_SIGN, QUADRANT_RADIUS, RING_RADII, SIGN_COUNT, TOP};
use crate::config::FontConfig;

/// Scale at which the configured font sizes are used as-is.
pub const REFERENCE_SCALE: f64 = 400.0;

/// Lays out the whole circle for one frame.
///
/// The action ring moves on the tick clock: its phrases shift by one slot per tick while the
/// ring eases back by one slot, so every phrase glides continuously into its neighbour's place.
/// The quality ring does the same on the sweep clock. The aspects follow the first action.
pub fn compose(frame: &Frame, fonts: &FontConfig) -> DrawList {
    let r = RING_RADII;
    let px = |size: f64| size * frame.scale / REFERENCE_SCALE;
    let sign = angle_step(SIGN_COUNT);
    let quality = angle_step(QUALITIES.len());

    let mut ctx = RenderContext::new(frame.center, frame.scale, fonts);

    ctx.rings(&r);
    ctx.enneagram(r[1]);
    ctx.divisions(Spokes {
        count: SIGN_COUNT,
        inner: r[0],
        outer: r[2],
        phase: TOP,
    });
    ctx.title(&Title {
        title: TITLE,
        subtitles: SUBTITLES,
        title_size: px(fonts.title_size.at(frame.breath)),
        subtitle_size: px(fonts.subtitle_size.at(frame.breath)),
    });

    let rings = [
        LabelRing {
            phrases: ACTIONS,
            size: LabelSize::Fixed(px(8.0)),
            inner: r[2],
            outer: r[3],
            angle_offset: -frame.tick.ease * sign,
            index_offset: frame.tick.index(ACTIONS.len()),
        },
        LabelRing {
            phrases: GENDERS,
            size: LabelSize::Fixed(px(6.0)),
            inner: r[2],
            outer: r[3],
            angle_offset: HALF_SIGN,
            index_offset: 0,
        },
        LabelRing {
            phrases: ELEMENTS,
            size: LabelSize::Fixed(px(8.0)),
            inner: r[1],
            outer: r[2],
            angle_offset: HALF_SIGN,
            index_offset: 0,
        },
        LabelRing {
            phrases: QUALITIES,
            size: LabelSize::Fixed(px(6.0)),
            inner: r[3],
            outer: r[4],
            angle_offset: quality / 2.0 - frame.sweep.ease * quality,
            index_offset: frame.sweep.index(QUALITIES.len()),
        },
        LabelRing {
            phrases: ZODIAC_SYMBOLS,
            size: LabelSize::Auto,
            inner: r[0],
            outer: r[1],
            angle_offset: HALF_SIGN,
            index_offset: 0,
        },
        LabelRing {
            phrases: ZODIAC_THEMES,
            size: LabelSize::Fixed(px(9.0)),
            inner: r[0] - 0.05,
            outer: r[0],
            angle_offset: HALF_SIGN,
            index_offset: 0,
        },
    ];
    for ring in &rings {
        ctx.label_ring(ring);
    }

    let seed = frame.tick.index(SIGN_COUNT) as f64 + frame.tick.ease;
    ctx.label_column(&LabelColumn {
        phrases: ASPECTS,
        size: px(7.0),
        radius: ASPECT_RADIUS,
        angle_offset: -seed * sign,
        index_offset: 0,
    });
    ctx.label_column(&LabelColumn {
        phrases: QUADRANTS,
        size: px(10.0),
        radius: QUADRANT_RADIUS,
        angle_offset: TOP,
        index_offset: 0,
    });

    ctx.finish()
}
