use super::geometry::Point;
use super::model::State;
use super::render_list::{Align, DrawCommand, DrawList, PlacedLabel};
use crate::gui::theme::ThemeColors;
use cairo::{Context, FontSlant, FontWeight, LineJoin, Operator};
use palette::Srgba;
use std::f64::consts::PI;

const LINE_WIDTH: f64 = 1.0;

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_background(cr, colors)?;
    paint(cr, &state.compose(), colors)
}

fn draw_background(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.save()?;
    set_source(cr, colors.background);
    cr.set_operator(Operator::Source);
    cr.paint()?;
    cr.restore()
}

/// Replays a draw list onto a cairo context.
pub fn paint(cr: &Context, list: &DrawList, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.set_line_width(LINE_WIDTH);
    cr.set_line_join(LineJoin::Bevel);

    for command in list {
        match command {
            DrawCommand::Circle { center, radius } => {
                cr.new_path();
                cr.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
                stroke(cr, colors)?;
            }
            DrawCommand::Polyline { points, closed } => {
                cr.new_path();
                points.iter().for_each(|p| cr.line_to(p.x, p.y));
                if *closed {
                    cr.close_path();
                }
                stroke(cr, colors)?;
            }
            DrawCommand::Line { from, to } => {
                cr.new_path();
                cr.move_to(from.x, from.y);
                cr.line_to(to.x, to.y);
                stroke(cr, colors)?;
            }
            DrawCommand::Label(label) => draw_label(cr, label, colors)?,
        }
    }
    Ok(())
}

fn stroke(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.stroke);
    cr.stroke()
}

fn draw_label(cr: &Context, label: &PlacedLabel, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.text);
    cr.select_font_face(&label.font.family, FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size(label.font.size);

    let ext = cr.text_extents(&label.text)?;
    // ink box relative to the anchor, vertically centered
    let origin = Point::new(
        match label.align {
            Align::Left => -ext.x_bearing(),
            Align::Center => -(ext.x_bearing() + ext.width() / 2.0),
            Align::Right => -(ext.x_bearing() + ext.width()),
        },
        -(ext.y_bearing() + ext.height() / 2.0),
    );

    cr.save()?;
    cr.translate(label.anchor.x, label.anchor.y);
    cr.rotate(label.rotation);
    cr.new_path();
    cr.move_to(origin.x, origin.y);
    cr.show_text(&label.text)?;
    cr.restore()
}
