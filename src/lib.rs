// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svg2vd` converts SVG icons into Android vector drawables.

An Android vector drawable is, roughly, an SVG stripped down to a flat
list of filled paths under a fixed viewport. This crate performs the
matching reduction: it reads an SVG, keeps only `path` and `circle`
elements, rewrites circles into arc-based path data (the drawable schema
has no circle primitive) and passes path data through byte-for-byte.

Supported input is deliberately narrow:

- `path` and `circle` are the only shapes. Rects, lines, polygons,
  groups, transforms, strokes and gradients are ignored.
- The fill color is not taken from the source at all. The caller picks
  one per document, either a `#AARRGGBB` literal or a resource
  reference like `@android:color/white`.

This is enough for single-color icon sets, which is the only intended
use case.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod convert;
mod error;
mod fill;
mod mapping;
mod shapes;

pub use crate::convert::{convert_file, convert_str, ANDROID_NS};
pub use crate::error::Error;
pub use crate::fill::{preserved_fill, probe_fill_color, DEFAULT_FILL};
pub use crate::mapping::ICON_MAPPING;
pub use crate::shapes::circle_to_path;
