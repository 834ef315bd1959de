// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use xmlwriter::{Indent, Options, XmlWriter};

use crate::shapes;
use crate::Error;

/// The Android resource attribute namespace.
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// Converts an SVG file into an Android vector drawable file.
///
/// The drawable is fully assembled in memory and written with a single
/// write call, so a failed conversion never leaves a partial file behind.
/// An existing file at `out_path` is overwritten.
pub fn convert_file(svg_path: &Path, out_path: &Path, fill_color: &str) -> Result<(), Error> {
    let text = std::fs::read_to_string(svg_path)?;
    let xml = convert_str(&text, fill_color)?;
    std::fs::write(out_path, xml)?;
    Ok(())
}

/// Converts SVG text into the contents of an Android vector drawable.
///
/// `path` elements pass their data through verbatim, `circle` elements
/// are rewritten into arcs. All emitted paths are filled with
/// `fill_color`, which can be a `#AARRGGBB` literal or a resource
/// reference. The drawable is fixed at 24dp, with the viewport taken
/// from the source `viewBox`.
///
/// Returns [`Error::NoShapes`] if the document contains neither shape.
pub fn convert_str(text: &str, fill_color: &str) -> Result<String, Error> {
    let doc = roxmltree::Document::parse(text)?;
    let (vp_width, vp_height) = viewport_size(doc.root_element());

    let paths = find_all(&doc, "path");
    let circles = find_all(&doc, "circle");
    if paths.is_empty() && circles.is_empty() {
        return Err(Error::NoShapes);
    }

    let opt = Options {
        use_single_quote: false,
        indent: Indent::Spaces(4),
        attributes_indent: Indent::None,
    };

    let mut xml = XmlWriter::new(opt);
    xml.start_element("vector");
    xml.write_attribute("xmlns:android", ANDROID_NS);
    xml.write_attribute("android:width", "24dp");
    xml.write_attribute("android:height", "24dp");
    xml.write_attribute("android:viewportWidth", vp_width);
    xml.write_attribute("android:viewportHeight", vp_height);

    for node in &paths {
        // Paths without data cannot be represented. Drop them.
        let data = match node.attribute("d") {
            Some(d) if !d.is_empty() => d,
            _ => continue,
        };

        write_path(&mut xml, fill_color, data);
    }

    for node in &circles {
        let data = shapes::convert_circle(*node)?;
        write_path(&mut xml, fill_color, &data);
    }

    Ok(format!("{}\n{}", XML_DECLARATION, xml.end_document()))
}

fn write_path(xml: &mut XmlWriter, fill_color: &str, data: &str) {
    xml.start_element("path");
    xml.write_attribute("android:fillColor", fill_color);
    xml.write_attribute("android:pathData", data);
    xml.end_element();
}

// The viewport is the viewBox without its origin.
//
// Tokens are copied verbatim, not parsed, since the drawable schema
// simply restates them.
fn viewport_size<'a>(root: roxmltree::Node<'a, '_>) -> (&'a str, &'a str) {
    let view_box = root.attribute("viewBox").unwrap_or("0 0 24 24");
    let mut tokens = view_box.split_whitespace();
    let width = tokens.nth(2).unwrap_or("24");
    let height = tokens.next().unwrap_or("24");
    (width, height)
}

/// Collects all elements with the given local name, at any depth.
///
/// Tries an SVG-namespace-qualified lookup first and falls back to bare
/// names, since icon sources do not reliably declare the namespace.
fn find_all<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    name: &str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    let qualified: Vec<_> = doc
        .root()
        .descendants()
        .filter(|n| n.has_tag_name((SVG_NS, name)))
        .collect();
    if !qualified.is_empty() {
        return qualified;
    }

    doc.root()
        .descendants()
        .filter(|n| n.has_tag_name(name))
        .collect()
}
