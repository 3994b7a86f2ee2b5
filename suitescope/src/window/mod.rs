//! Main window: address bar, cascading selectors, and the resource table
//!
//! The window is a projection of the [`Browser`] state. Every signal
//! handler calls one browser command, shows a modal warning when it
//! fails, and repaints the affected widgets from the returned state.

mod address;
mod table;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use adw::prelude::*;
use gtk4::{
    Box as GtkBox, DropDown, EventControllerKey, Label, Orientation, StringList, gdk, glib,
};
use libadwaita as adw;

use suitescope_core::browser::Browser;
use suitescope_core::clipboard::serialize_selection;
use suitescope_core::models::ResourcePage;

use crate::app::show_warning;
use crate::details::present_details;
use address::AddressBar;
use table::ResourceTable;

/// Fixed width of the selector dropdowns
const SELECTOR_WIDTH: i32 = 500;

/// The main application window
pub struct MainWindow {
    window: adw::ApplicationWindow,
}

impl MainWindow {
    /// Builds the window and wires all handlers to the browser
    #[must_use]
    pub fn new(app: &adw::Application, browser: Browser) -> Self {
        let browser = Rc::new(RefCell::new(browser));
        // Guards selected-notify handlers while dropdown models are replaced
        let repopulating = Rc::new(Cell::new(false));

        let address = AddressBar::new();
        address.set_completions(browser.borrow().completions());
        let address = Rc::new(address);

        let (kind_row, kind_dropdown) = selector_row("Adapter Kind:");
        let (resource_kind_row, resource_kind_dropdown) = selector_row("Resource Kind:");
        let (instance_row, instance_dropdown) = selector_row("Adapter Instance:");
        let table = Rc::new(ResourceTable::new());

        let content = GtkBox::new(Orientation::Vertical, 8);
        content.set_margin_start(12);
        content.set_margin_end(12);
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        content.append(address.widget());
        content.append(&kind_row);
        content.append(&resource_kind_row);
        content.append(&instance_row);
        content.append(table.widget());

        let toolbar_view = adw::ToolbarView::new();
        toolbar_view.add_top_bar(&adw::HeaderBar::new());
        toolbar_view.set_content(Some(&content));

        let window = adw::ApplicationWindow::builder()
            .application(app)
            .title("SuiteScope")
            .default_width(800)
            .default_height(600)
            .content(&toolbar_view)
            .build();

        // Connect: construct client, populate adapter kinds, refresh history
        {
            let browser = browser.clone();
            let window = window.clone();
            let address_bar = address.clone();
            let kind_dropdown = kind_dropdown.clone();
            let resource_kind_dropdown = resource_kind_dropdown.clone();
            let instance_dropdown = instance_dropdown.clone();
            let table = table.clone();
            let repopulating = repopulating.clone();
            address.connect_activated(move |hostname| {
                let result = browser.borrow_mut().connect(&hostname);
                if let Err(e) = result {
                    show_warning(&window, &e.to_string());
                    return;
                }

                let state = browser.borrow();
                let labels: Vec<&str> =
                    state.adapter_kinds().iter().map(|k| k.label.as_str()).collect();
                set_items(&kind_dropdown, &labels, &repopulating, false);
                set_items(&resource_kind_dropdown, &[], &repopulating, false);
                set_items(&instance_dropdown, &[], &repopulating, false);
                table.set_page(&ResourcePage::default());
                address_bar.set_completions(state.completions());
            });
        }

        // Adapter-kind cascade: repopulate both dependent selectors
        {
            let browser = browser.clone();
            let window = window.clone();
            let resource_kind_dropdown = resource_kind_dropdown.clone();
            let instance_dropdown = instance_dropdown.clone();
            let table = table.clone();
            let repopulating = repopulating.clone();
            kind_dropdown.connect_selected_notify(move |dropdown| {
                if repopulating.get() {
                    return;
                }
                let Some(index) = selected_index(dropdown) else {
                    return;
                };

                let result = browser.borrow_mut().select_adapter_kind(index);
                match result {
                    Ok(()) => {
                        let state = browser.borrow();
                        let kinds: Vec<&str> = state
                            .resource_kinds()
                            .iter()
                            .map(|k| k.label.as_str())
                            .collect();
                        let instances: Vec<&str> = state
                            .adapter_instances()
                            .iter()
                            .map(|i| i.label.as_str())
                            .collect();
                        // Resource kind defaults to its first entry; the
                        // instance pick is what triggers the fetch
                        set_items(&resource_kind_dropdown, &kinds, &repopulating, true);
                        set_items(&instance_dropdown, &instances, &repopulating, false);
                    }
                    Err(e) => {
                        set_items(&resource_kind_dropdown, &[], &repopulating, false);
                        set_items(&instance_dropdown, &[], &repopulating, false);
                        show_warning(&window, &e.to_string());
                    }
                }
                table.set_page(&ResourcePage::default());
            });
        }

        // Adapter-instance selection: rebuild the resource table
        {
            let browser = browser.clone();
            let window = window.clone();
            let resource_kind_dropdown = resource_kind_dropdown.clone();
            let table = table.clone();
            let repopulating = repopulating.clone();
            instance_dropdown.connect_selected_notify(move |dropdown| {
                if repopulating.get() {
                    return;
                }
                let Some(instance_index) = selected_index(dropdown) else {
                    return;
                };
                let Some(resource_kind_index) = selected_index(&resource_kind_dropdown) else {
                    show_warning(&window, "Please select a resource kind first.");
                    return;
                };

                let result = browser
                    .borrow_mut()
                    .select_adapter_instance(instance_index, resource_kind_index);
                match result {
                    Ok(()) => table.set_page(browser.borrow().resources()),
                    Err(e) => {
                        table.set_page(&ResourcePage::default());
                        show_warning(&window, &e.to_string());
                    }
                }
            });
        }

        // Row activation (double-click): open the details window
        {
            let browser = browser.clone();
            let window = window.clone();
            let table_ref = table.clone();
            table.view().connect_activate(move |_, _| {
                let cells = table_ref.selected_cells();
                let result = browser.borrow().activate_selection(&cells);
                match result {
                    Ok(details) => present_details(&details),
                    Err(e) => show_warning(&window, &e.to_string()),
                }
            });
        }

        // Ctrl+C: copy the selection as tab-separated text
        {
            let window_ref = window.clone();
            let table = table.clone();
            let key_controller = EventControllerKey::new();
            key_controller.connect_key_pressed(move |_, keyval, _, modifiers| {
                // Let Ctrl+C bubble on when nothing is selected, so entry
                // widgets keep their own copy behavior
                if keyval == gdk::Key::c
                    && modifiers.contains(gdk::ModifierType::CONTROL_MASK)
                    && copy_selection_to_clipboard(&window_ref, &table)
                {
                    return glib::Propagation::Stop;
                }
                glib::Propagation::Proceed
            });
            window.add_controller(key_controller);
        }

        Self { window }
    }

    /// Shows the window
    pub fn present(&self) {
        self.window.present();
    }
}

/// Builds one labeled selector row
fn selector_row(title: &str) -> (GtkBox, DropDown) {
    let row = GtkBox::new(Orientation::Horizontal, 8);
    let label = Label::new(Some(title));
    let dropdown = DropDown::builder().width_request(SELECTOR_WIDTH).build();
    dropdown.set_sensitive(false);
    row.append(&label);
    row.append(&dropdown);
    (row, dropdown)
}

/// Replaces a dropdown's items, suppressing its selected-notify handler.
///
/// With `preselect_first` the first entry becomes current (used for the
/// resource-kind selector, which is read at instance-selection time);
/// otherwise the selection is left invalid so the user's first pick
/// always fires the handler.
fn set_items(dropdown: &DropDown, labels: &[&str], repopulating: &Cell<bool>, preselect_first: bool) {
    repopulating.set(true);
    dropdown.set_model(Some(&StringList::new(labels)));
    if preselect_first && !labels.is_empty() {
        dropdown.set_selected(0);
    } else {
        dropdown.set_selected(gtk4::INVALID_LIST_POSITION);
    }
    dropdown.set_sensitive(!labels.is_empty());
    repopulating.set(false);
}

/// The dropdown's selected index, if anything is selected
fn selected_index(dropdown: &DropDown) -> Option<usize> {
    let selected = dropdown.selected();
    (selected != gtk4::INVALID_LIST_POSITION).then_some(selected as usize)
}

/// Serializes the table selection and writes it to the system clipboard.
/// Returns whether anything was copied.
fn copy_selection_to_clipboard(window: &adw::ApplicationWindow, table: &ResourceTable) -> bool {
    let cells = table.selected_cells();
    if cells.is_empty() {
        return false;
    }
    let text = serialize_selection(&table.headers(), &cells);
    window.display().clipboard().set_text(&text);
    tracing::debug!(cells = cells.len(), "selection copied to clipboard");
    true
}
