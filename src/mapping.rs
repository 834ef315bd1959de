// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Drawable name to source icon name.
///
/// Treat this as configuration, not logic: a few entries substitute a
/// similar icon where the set has no exact equivalent, and `None` marks
/// drawables that are deliberately not generated, like the launcher art.
pub const ICON_MAPPING: &[(&str, Option<&str>)] = &[
    ("ic_close", Some("close")),
    ("ic_settings", Some("settings")),
    ("ic_history", Some("clock")),
    ("ic_search", Some("search")),
    ("ic_delete", Some("trash")),
    ("ic_catalog", Some("grid")),
    ("ic_edit", Some("edit")),
    ("ic_share", Some("share")),
    ("ic_content_copy", Some("copy")),
    ("ic_chevron_back", Some("chevron-left")),
    ("ic_chevron_forward", Some("chevron-right")),
    ("ic_plus", Some("plus")),
    ("ic_minus", Some("minus")),
    ("ic_arrow_back", Some("arrow-back")),
    ("ic_bitcoin", Some("credit-card")), // placeholder
    ("ic_balance_check", Some("checkmark-circle")),
    ("ic_check", Some("checkmark")),
    ("ic_checkmark_circle", Some("checkmark-circle-2")),
    ("ic_home", Some("home")),
    ("ic_scan", Some("camera")),
    ("ic_top_up", Some("arrow-upward")),
    ("ic_switch_currency", Some("swap")),
    ("ic_more_vert", Some("more-vertical")),
    ("ic_open_with", Some("share")),
    ("ic_card", Some("credit-card")),
    ("ic_light_mode", Some("sun")),
    ("ic_dark_mode", Some("moon")),
    ("ic_contactless", Some("radio")), // placeholder
    ("ic_contactless_waves", Some("activity")), // placeholder
    ("ic_circle_green", Some("checkmark-circle")),
    ("ic_dollar_white", Some("credit-card")), // placeholder
    ("ic_launcher_background", None),
    ("ic_launcher_foreground", None),
    ("ic_image_placeholder", Some("image")),
    ("ic_profile_placeholder", Some("person")),
];
