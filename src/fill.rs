// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::ANDROID_NS;

/// Opaque black, the fallback fill.
pub const DEFAULT_FILL: &str = "#FF000000";

// A tinted drawable must stay white, so the tint shows through.
const TINTED_FILL: &str = "@android:color/white";

/// Picks the fill for a drawable that is about to be regenerated.
///
/// A pre-existing drawable at `path` wins over `default`, see
/// [`preserved_fill`]. An absent or unreadable file falls back to
/// `default`. This probe never fails.
pub fn probe_fill_color(path: &Path, default: &str) -> String {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|text| preserved_fill(&text))
        .unwrap_or_else(|| default.to_string())
}

/// Extracts the fill worth keeping from an existing vector drawable.
///
/// An `android:tint` on the root means the drawable is colored at the
/// use site and the fill itself must be the symbolic white reference.
/// Otherwise the first path's `android:fillColor` is carried over.
/// Anything malformed or missing yields `None`.
pub fn preserved_fill(text: &str) -> Option<String> {
    let doc = roxmltree::Document::parse(text).ok()?;
    let root = doc.root_element();

    if root.attribute((ANDROID_NS, "tint")).is_some() {
        return Some(TINTED_FILL.to_string());
    }

    let path = root.descendants().find(|n| n.has_tag_name("path"))?;
    path.attribute((ANDROID_NS, "fillColor")).map(str::to_string)
}
