// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

use canopy_layout::{LaidOutNode, Layout};
use canopy_view::ViewTransform;
use kurbo::{Point, Rect};

use crate::color::Colorize;
use crate::style::StyleConfig;
use crate::surface::RasterSurface;
use crate::text::{fit_label, value_to_bytes};

/// Clears `surface` and paints every drawable node of `layout` through `view`.
///
/// Each node gets a filled box stroked in a darker shade and, if the cell is
/// tall enough, a label. The root is never painted. Nodes that fall entirely
/// outside the surface are skipped.
///
/// The call is self-contained: nothing is carried over from previous calls
/// except what the surface itself retains.
pub fn render<S, C>(
    surface: &mut S,
    layout: &Layout,
    view: ViewTransform,
    style: &StyleConfig,
    colorize: &C,
) where
    S: RasterSurface + ?Sized,
    C: Colorize + ?Sized,
{
    surface.clear();
    let ratio = style.ratio();
    surface.set_font_size(style.font_size * ratio);

    let size = surface.size();
    let bounds = size.to_rect();
    let surface_area = size.width * size.height;
    // Device-pixel cell height against the unscaled font metrics.
    let label_min_height = style.font_size * style.line_height;

    for (id, node) in layout.drawable() {
        let cell = view.apply_rect(node.rect);
        if !overlaps(cell, bounds) {
            continue;
        }

        let border = border_width(node.area(), surface_area, style.base_line_width, ratio);
        let boxed = inset_for_stroke(cell, border);
        let fill = colorize.colorize(layout, id);
        surface.fill_rect(boxed, fill.to_color());
        surface.stroke_rect(boxed, fill.darken().to_color(), border);

        if label_min_height < cell.height() {
            draw_label(surface, node, cell, border, style);
        }
    }
}

/// Stroke width for a node of layout area `area` on a surface of
/// `surface_area`, in device pixels.
///
/// `max(1, base * sqrt(area / surface_area)) * ratio`.
pub fn border_width(area: f64, surface_area: f64, base: f64, ratio: f64) -> f64 {
    let share = if surface_area > 0.0 && area > 0.0 {
        (area / surface_area).sqrt()
    } else {
        0.0
    };
    (base * share).max(1.0) * ratio
}

fn inset_for_stroke(cell: Rect, border: f64) -> Rect {
    let half = border / 2.0;
    let x0 = cell.x0 + half;
    let y0 = cell.y0 + half;
    Rect::new(x0, y0, (cell.x1 - half).max(x0), (cell.y1 - half).max(y0))
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

fn draw_label<S: RasterSurface + ?Sized>(
    surface: &mut S,
    node: &LaidOutNode,
    cell: Rect,
    border: f64,
    style: &StyleConfig,
) {
    let margin = border * 1.5 + style.ratio() * style.text_margin;
    let inner = cell.width() - margin * 2.0;
    let Some(label) = fit_label(
        surface,
        &node.name,
        value_to_bytes(node.aggregate_value),
        node.aggregate_count,
        inner,
        &style.ellipsis,
    ) else {
        return;
    };

    let origin = Point::new(cell.x0 + margin, cell.y0 + margin);
    surface.fill_text(&label.name, origin, style.text_color);
    if let Some(detail) = label.detail {
        surface.fill_text(
            &detail.text,
            Point::new(origin.x + detail.offset, origin.y),
            style.secondary_text_color,
        );
    }
}
