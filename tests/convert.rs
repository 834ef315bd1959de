fn convert(svg: &str) -> String {
    svg2vd::convert_str(svg, "#FF000000").unwrap()
}

#[test]
fn path_passthrough() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <path d='M 6 6 L 18 18'/>
    </svg>
    ";

    let expected = r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android" android:width="24dp" android:height="24dp" android:viewportWidth="24" android:viewportHeight="24">
    <path android:fillColor="#FF000000" android:pathData="M 6 6 L 18 18"/>
</vector>"##;

    assert_eq!(convert(svg).trim_end(), expected);
}

#[test]
fn one_element_per_source_path() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <path d='M 1 1 L 2 2'/>
        <g><path d='M 3 3 L 4 4'/></g>
    </svg>
    ";

    let out = convert(svg);
    assert_eq!(out.matches("<path ").count(), 2);

    // Document order is kept, nesting depth does not matter.
    let first = out.find("M 1 1 L 2 2").unwrap();
    let second = out.find("M 3 3 L 4 4").unwrap();
    assert!(first < second);
}

#[test]
fn empty_path_data_is_dropped() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <path d=''/>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = convert(svg);
    assert_eq!(out.matches("<path ").count(), 1);
    assert!(out.contains("M 0 0 L 1 1"));
}

#[test]
fn no_shapes_is_an_error() {
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'/>";
    assert!(matches!(
        svg2vd::convert_str(svg, "#FF000000"),
        Err(svg2vd::Error::NoShapes)
    ));
}

#[test]
fn unsupported_shapes_do_not_count() {
    // Only paths and circles are supported. A rect alone is "no shapes".
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <rect width='10' height='10'/>
    </svg>
    ";
    assert!(matches!(
        svg2vd::convert_str(svg, "#FF000000"),
        Err(svg2vd::Error::NoShapes)
    ));
}

#[test]
fn malformed_xml_is_an_error() {
    assert!(matches!(
        svg2vd::convert_str("<svg><path", "#FF000000"),
        Err(svg2vd::Error::ParsingFailed(_))
    ));
}

#[test]
fn missing_viewbox_defaults_to_24() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg'>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains("android:viewportWidth=\"24\""));
    assert!(out.contains("android:viewportHeight=\"24\""));
}

#[test]
fn short_viewbox_defaults_missing_tokens() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32'>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains("android:viewportWidth=\"32\""));
    assert!(out.contains("android:viewportHeight=\"24\""));
}

#[test]
fn viewbox_tokens_are_copied_verbatim() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 23.5 47'>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains("android:viewportWidth=\"23.5\""));
    assert!(out.contains("android:viewportHeight=\"47\""));
}

#[test]
fn circle_becomes_two_arcs() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle cx='12' cy='12' r='10'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains(
        "android:pathData=\"M 2.0,12.0 A 10.0,10.0 0 1,1 22.0,12.0 A 10.0,10.0 0 1,1 2.0,12.0\""
    ));
    assert!(out.contains("android:fillColor=\"#FF000000\""));
}

#[test]
fn circle_attributes_default_to_grid_center() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains(
        "android:pathData=\"M 10.0,12.0 A 2.0,2.0 0 1,1 14.0,12.0 A 2.0,2.0 0 1,1 10.0,12.0\""
    ));
}

#[test]
fn circle_fractional_coordinates() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle cx='12.5' cy='12' r='2'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains(
        "android:pathData=\"M 10.5,12.0 A 2.0,2.0 0 1,1 14.5,12.0 A 2.0,2.0 0 1,1 10.5,12.0\""
    ));
}

#[test]
fn circle_coordinate_unit_is_ignored() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle cx='12px' cy='12' r='10'/>
    </svg>
    ";

    let out = convert(svg);
    assert!(out.contains("M 2.0,12.0 "));
}

#[test]
fn circle_garbage_coordinate_is_an_error() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle cx='abc' cy='12' r='10'/>
    </svg>
    ";
    assert!(matches!(
        svg2vd::convert_str(svg, "#FF000000"),
        Err(svg2vd::Error::InvalidCoordinate(_))
    ));
}

#[test]
fn paths_are_emitted_before_circles() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <circle cx='12' cy='12' r='10'/>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = convert(svg);
    let path = out.find("M 0 0 L 1 1").unwrap();
    let circle = out.find("M 2.0,12.0").unwrap();
    assert!(path < circle);
}

#[test]
fn elements_without_namespace_are_found() {
    let svg = "
    <svg viewBox='0 0 24 24'>
        <path d='M 0 0 L 1 1'/>
        <circle cx='12' cy='12' r='2'/>
    </svg>
    ";

    let out = convert(svg);
    assert_eq!(out.matches("<path ").count(), 2);
}

#[test]
fn fill_color_is_forwarded_verbatim() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <path d='M 0 0 L 1 1'/>
    </svg>
    ";

    let out = svg2vd::convert_str(svg, "@android:color/white").unwrap();
    assert!(out.contains("android:fillColor=\"@android:color/white\""));
}

#[test]
fn conversion_is_deterministic() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'>
        <path d='M 6 6 L 18 18'/>
        <circle cx='12' cy='12' r='10'/>
    </svg>
    ";

    assert_eq!(convert(svg), convert(svg));
}

#[test]
fn launcher_entries_are_unmapped() {
    for &(name, source) in svg2vd::ICON_MAPPING {
        assert!(!name.is_empty());
        if name.starts_with("ic_launcher") {
            assert!(source.is_none());
        } else {
            assert!(!source.unwrap().is_empty());
        }
    }
}
