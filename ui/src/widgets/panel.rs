//! The encoding-parameter side panel.
//!
//! Every widget binds directly to a [`ViewerState`] field; the panel reports
//! whether any edit happened so the caller can re-run the encode pipeline
//! once per frame at most.

use egui::{ComboBox, DragValue, TextEdit, Ui};
use qrview_business::{EccLevel, TEXT_LIMIT, ViewerState};

/// Canned payloads for the preset row.
const PRESETS: &[(&str, &str)] = &[
    ("Text", "Hello, World!"),
    ("URL", "https://www.rust-lang.org/"),
    ("Email", "mailto:someone@yoursite.com?subject=Mail%20from%20Our%20Site"),
    ("Phone", "tel:+12125551212"),
    ("Wifi", "WIFI:T:WPA;S:mynetwork;P:mypass;;"),
];

/// Render the parameter panel.
///
/// Returns `true` when any edit requires a pipeline recompute.
pub fn parameter_panel(viewer: &mut ViewerState, ui: &mut Ui) -> bool {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        for &(label, payload) in PRESETS {
            if ui.button(label).clicked() {
                viewer.request.text = payload.to_owned();
                changed = true;
            }
        }
    });

    changed |= ui
        .add(
            TextEdit::multiline(&mut viewer.request.text)
                .char_limit(TEXT_LIMIT)
                .hint_text("Text to encode"),
        )
        .changed();

    ComboBox::from_label("ECC")
        .selected_text(viewer.request.ecc.label())
        .show_ui(ui, |ui| {
            for level in EccLevel::ALL {
                changed |= ui
                    .selectable_value(&mut viewer.request.ecc, level, level.label())
                    .changed();
            }
        });

    changed |= ui.checkbox(&mut viewer.request.boost_ecc, "Boost ECC").changed();

    // Version bounds go through the request's setters so the cross-bound
    // clamp rule holds mid-edit, not only at the next recompute.
    let mut min_version = i32::from(viewer.request.min_version);
    ui.horizontal(|ui| {
        if ui.add(DragValue::new(&mut min_version).range(1..=40)).changed() {
            viewer.request.set_min_version(min_version);
            changed = true;
        }
        ui.label("Version Min");
    });

    let mut max_version = i32::from(viewer.request.max_version);
    ui.horizontal(|ui| {
        if ui.add(DragValue::new(&mut max_version).range(1..=40)).changed() {
            viewer.request.set_max_version(max_version);
            changed = true;
        }
        ui.label("Version Max");
    });

    let mut mask = i32::from(viewer.request.mask);
    ui.horizontal(|ui| {
        if ui.add(DragValue::new(&mut mask).range(-1..=7)).changed() {
            viewer.request.set_mask(mask);
            changed = true;
        }
        ui.label("Mask (-1 = auto)");
    });

    ui.separator();

    ui.label("Color 1");
    changed |= ui
        .color_edit_button_rgba_unmultiplied(&mut viewer.colors.foreground)
        .changed();
    ui.label("Color 2");
    changed |= ui
        .color_edit_button_rgba_unmultiplied(&mut viewer.colors.background)
        .changed();

    changed
}
