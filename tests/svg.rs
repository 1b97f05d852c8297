// SPDX-FileCopyrightText: 2014 kennytm
// SPDX-FileCopyrightText: 2016 Steven Allen
// SPDX-FileCopyrightText: 2019 Ivan Tham
// SPDX-FileCopyrightText: 2019 Jasper Bryant-Greene
// SPDX-FileCopyrightText: 2024 Alexis Hildebrandt
// SPDX-FileCopyrightText: 2024 Michael Spiegel
// SPDX-FileCopyrightText: 2024 Shun Sakai
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "svg")]

use qr_codec::{EcLevel, QrCode, Version, render::svg::Color};

#[test]
fn test_annex_i_qr_as_svg() {
    let code = QrCode::new(b"01234567").unwrap();
    let image = code.render::<Color<'_>>().build();
    assert!(image.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
    let side = (code.width() + 2 * 4) * 8;
    assert!(image.contains(&format!(r#"width="{side}" height="{side}""#)));
    assert!(image.ends_with(r#""/></svg>"#));
}

#[test]
fn test_annex_i_micro_qr_as_svg() {
    let code = QrCode::with_version(b"01234567", Version::Micro(2), EcLevel::L).unwrap();
    let image = code
        .render()
        .min_dimensions(200, 200)
        .dark_color(Color("#800000"))
        .light_color(Color("#ffff80"))
        .build();
    assert!(image.contains(r##"fill="#ffff80""##));
    assert!(image.contains(r##"fill="#800000""##));
}

#[test]
fn test_svg_without_quiet_zone_is_smaller() {
    let code = QrCode::new(b"01234567").unwrap();
    let with_border = code.render::<Color<'_>>().build();
    let without_border = code.render::<Color<'_>>().has_quiet_zone(false).build();
    assert!(without_border.len() < with_border.len());
    let side = code.width() * 8;
    assert!(without_border.contains(&format!(r#"width="{side}" height="{side}""#)));
}
