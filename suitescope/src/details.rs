//! Resource details window
//!
//! An independent top-level window listing the metrics and properties of
//! one resource. Several can be open at once; each closes on its own.

use adw::prelude::*;
use gtk4::{Box as GtkBox, Orientation, ScrolledWindow};
use libadwaita as adw;

use suitescope_core::browser::ResourceDetails;

/// Opens a non-modal window showing the fetched metrics and properties
pub fn present_details(details: &ResourceDetails) {
    let content = GtkBox::new(Orientation::Vertical, 12);
    content.set_margin_start(12);
    content.set_margin_end(12);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    let metrics = adw::PreferencesGroup::builder().title("Metrics").build();
    if details.metrics.is_empty() {
        metrics.set_description(Some("No metrics reported for this resource."));
    }
    for sample in &details.metrics {
        let row = adw::ActionRow::builder().title(sample.key.as_str()).build();
        let value = match sample.timestamp {
            Some(ts) => format!("{} ({})", sample.value, ts.format("%Y-%m-%d %H:%M:%S UTC")),
            None => sample.value.to_string(),
        };
        row.set_subtitle(&value);
        metrics.add(&row);
    }
    content.append(&metrics);

    let properties = adw::PreferencesGroup::builder().title("Properties").build();
    if details.properties.is_empty() {
        properties.set_description(Some("No properties reported for this resource."));
    }
    for property in &details.properties {
        let row = adw::ActionRow::builder()
            .title(property.name.as_str())
            .subtitle(property.value.as_str())
            .build();
        properties.add(&row);
    }
    content.append(&properties);

    let scroller = ScrolledWindow::builder().child(&content).vexpand(true).build();

    let toolbar_view = adw::ToolbarView::new();
    toolbar_view.add_top_bar(&adw::HeaderBar::new());
    toolbar_view.set_content(Some(&scroller));

    let window = adw::Window::builder()
        .title(details.title.as_str())
        .default_width(600)
        .default_height(800)
        .content(&toolbar_view)
        .build();
    window.present();
}
