// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte formatting and label fitting.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use crate::surface::RasterSurface;

const KIB: u64 = 1024;
const MIB: u64 = KIB * KIB;
const GIB: u64 = MIB * KIB;

/// Formats a byte count with a binary unit, truncating toward zero.
///
/// `1023` is `"1023B"`, `1024 * 1024 - 1` is `"1023KB"`, and anything from
/// one gibibyte up is printed with a bare `"G"` suffix.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes}B")
    } else if bytes < MIB {
        format!("{}KB", bytes / KIB)
    } else if bytes < GIB {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{}G", bytes / GIB)
    }
}

/// Converts an aggregate value to whole bytes for display.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Display only; `as` saturates and maps NaN to zero."
)]
pub(crate) fn value_to_bytes(value: f64) -> u64 {
    value as u64
}

/// Shortens `name` by repeatedly halving it (by `char`) and appending
/// `ellipsis` until `measure` says it fits in `max_width`.
///
/// Returns `None` if not even the bare ellipsis fits. The first candidate
/// keeps half of the `n = name.chars().count()` chars, and each retry halves
/// again, so truncation ends within `ceil(log2(n))` halving steps after the
/// first candidate and measures at most `ceil(log2(n)) + 1` strings.
pub fn truncate_label(
    mut measure: impl FnMut(&str) -> f64,
    name: &str,
    max_width: f64,
    ellipsis: &str,
) -> Option<String> {
    let mut kept = name;
    let mut len = name.chars().count();
    loop {
        len /= 2;
        kept = prefix(kept, len);
        let candidate = format!("{kept}{ellipsis}");
        if measure(&candidate) <= max_width {
            return Some(candidate);
        }
        if len == 0 {
            return None;
        }
    }
}

fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// A label that fits inside a cell.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedLabel<'a> {
    /// The name, possibly truncated with an ellipsis.
    pub name: Cow<'a, str>,
    /// The `"<size> <count> count"` suffix, if it fits after the full name.
    pub detail: Option<LabelDetail>,
}

/// Secondary text drawn after a label's name.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDetail {
    /// Suffix text.
    pub text: String,
    /// Horizontal distance from the start of the name.
    pub offset: f64,
}

/// Fits a cell label into `max_width` using the surface's current font.
///
/// In order of preference:
/// 1. `name`, then the size and count, e.g. `Function 608KB 9083 count`;
/// 2. `name` alone;
/// 3. `name` halved until it fits, with an ellipsis;
/// 4. nothing, if even the ellipsis is too wide.
pub fn fit_label<'a, S: RasterSurface + ?Sized>(
    surface: &mut S,
    name: &'a str,
    bytes: u64,
    count: u64,
    max_width: f64,
    ellipsis: &str,
) -> Option<FittedLabel<'a>> {
    if surface.measure_text(ellipsis) > max_width {
        return None;
    }
    let name_width = surface.measure_text(name);
    if name_width > max_width {
        let short = truncate_label(|s| surface.measure_text(s), name, max_width, ellipsis)?;
        return Some(FittedLabel {
            name: Cow::Owned(short),
            detail: None,
        });
    }

    let size_text = format_bytes(bytes);
    let count_text = format!("{count} count");
    let needed = name_width
        + surface.measure_text(&size_text)
        + surface.measure_text(&count_text)
        + surface.measure_text(" ") * 3.0;
    let detail = if needed > max_width {
        None
    } else {
        Some(LabelDetail {
            text: format!("{size_text} {count_text}"),
            offset: name_width + surface.measure_text(" "),
        })
    };
    Some(FittedLabel {
        name: Cow::Borrowed(name),
        detail,
    })
}
