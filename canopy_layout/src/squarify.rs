// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified subdivision of a rectangle (Bruls, Huizing, van Wijk).
//!
//! Items are laid out in rows along the shorter side of the free rectangle.
//! A row keeps growing while adding the next item does not worsen the worst
//! aspect ratio in the row. Each placed rectangle has exactly the requested
//! area, up to floating point error; the last item in a row absorbs that
//! error so rows always span the full side.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

/// Running statistics of the row under construction.
#[derive(Clone, Copy, Debug)]
struct Row {
    sum: f64,
    min: f64,
    max: f64,
}

impl Row {
    fn new(area: f64) -> Self {
        Self {
            sum: area,
            min: area,
            max: area,
        }
    }

    fn with(self, area: f64) -> Self {
        Self {
            sum: self.sum + area,
            min: self.min.min(area),
            max: self.max.max(area),
        }
    }

    /// Worst aspect ratio of the row when laid along a side of length `side`.
    fn worst(&self, side: f64) -> f64 {
        if self.sum <= 0.0 || self.min <= 0.0 || side <= 0.0 {
            return f64::MAX;
        }
        let side_sq = side * side;
        let sum_sq = self.sum * self.sum;
        ((side_sq * self.max) / sum_sq).max(sum_sq / (side_sq * self.min))
    }
}

/// Places `areas` (positive, sorted descending) inside `bounds`.
///
/// `out` is cleared and receives one rectangle per area, in the same order.
pub(crate) fn squarify(areas: &[f64], bounds: Rect, out: &mut Vec<Rect>) {
    out.clear();
    let mut free = bounds;
    let mut start = 0;
    while start < areas.len() {
        let short = free.width().min(free.height());
        if short.is_nan() || short <= 0.0 {
            // Nothing left to split; the remaining items collapse to a point.
            let point = Rect::from_origin_size(free.origin(), Size::ZERO);
            out.extend(areas[start..].iter().map(|_| point));
            return;
        }

        let mut row = Row::new(areas[start]);
        let mut end = start + 1;
        while end < areas.len() {
            let grown = row.with(areas[end]);
            if grown.worst(short) > row.worst(short) {
                break;
            }
            row = grown;
            end += 1;
        }

        free = lay_row(&areas[start..end], row.sum, free, out);
        start = end;
    }
}

/// Lays one row against the shorter side of `free`, returning what is left.
fn lay_row(row: &[f64], sum: f64, free: Rect, out: &mut Vec<Rect>) -> Rect {
    // A wide rectangle gets a column on its left; a tall one gets a strip on top.
    let across = free.width() <= free.height();
    let (side, depth) = if across {
        (free.width(), free.height())
    } else {
        (free.height(), free.width())
    };
    let thickness = (sum / side).min(depth);

    let mut offset = 0.0;
    for (i, &area) in row.iter().enumerate() {
        let mut length = area / thickness;
        if i + 1 == row.len() {
            let remaining = side - offset;
            if remaining > 0.0 {
                length = remaining;
            }
        }
        let rect = if across {
            let x0 = free.x0 + offset;
            Rect::new(x0, free.y0, (x0 + length).min(free.x1), free.y0 + thickness)
        } else {
            let y0 = free.y0 + offset;
            Rect::new(free.x0, y0, free.x0 + thickness, (y0 + length).min(free.y1))
        };
        out.push(rect);
        offset += length;
    }

    if across {
        Rect::new(free.x0, (free.y0 + thickness).min(free.y1), free.x1, free.y1)
    } else {
        Rect::new((free.x0 + thickness).min(free.x1), free.y0, free.x1, free.y1)
    }
}
