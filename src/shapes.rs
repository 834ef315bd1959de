// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::Length;

use crate::Error;

// Defaults when an attribute is absent: the 24x24 icon grid center
// and a nominal radius.
const DEFAULT_CX: f64 = 12.0;
const DEFAULT_CY: f64 = 12.0;
const DEFAULT_R: f64 = 2.0;

pub(crate) fn convert_circle(node: roxmltree::Node) -> Result<String, Error> {
    let cx = length_attr(node, "cx", DEFAULT_CX)?;
    let cy = length_attr(node, "cy", DEFAULT_CY)?;
    let r = length_attr(node, "r", DEFAULT_R)?;
    Ok(circle_to_path(cx, cy, r))
}

// Icon sources use plain user units, so the unit suffix is ignored.
fn length_attr(node: roxmltree::Node, name: &str, default: f64) -> Result<f64, Error> {
    match node.attribute(name) {
        Some(value) => {
            let length = value.parse::<Length>()?;
            Ok(length.number)
        }
        None => Ok(default),
    }
}

/// Produces path data tracing a full circle.
///
/// Path data has no circle primitive, so the circle is split at its
/// leftmost point into two semicircular arcs. Both sweep flags are set,
/// making the path run clockwise through the top half and then the
/// bottom half, back to the starting point.
pub fn circle_to_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {},{} A {},{} 0 1,1 {},{} A {},{} 0 1,1 {},{}",
        num(cx - r),
        num(cy),
        num(r),
        num(r),
        num(cx + r),
        num(cy),
        num(r),
        num(r),
        num(cx - r),
        num(cy),
    )
}

// Whole numbers keep an explicit fraction, `2` -> `2.0`.
fn num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}
