//! Address bar: hostname entry with history autocomplete and connect button
//!
//! The completion popover is fed from the persisted hostname history and
//! filtered by prefix as the user types. Picking a suggestion fills the
//! entry without re-opening the popover.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, Entry, Label, ListBox, Orientation, Popover, PositionType,
    SelectionMode,
};

/// Maximum number of suggestions shown at once
const MAX_SUGGESTIONS: usize = 8;

/// The address row of the main window
pub struct AddressBar {
    container: GtkBox,
    entry: Entry,
    connect_button: Button,
    completions: Rc<RefCell<Vec<String>>>,
    popover: Popover,
}

impl AddressBar {
    /// Builds the address row
    #[must_use]
    pub fn new() -> Self {
        let container = GtkBox::new(Orientation::Horizontal, 8);

        let label = Label::new(Some("Hostname:"));
        let entry = Entry::builder()
            .hexpand(true)
            .placeholder_text("ops.example.com")
            .build();
        let connect_button = Button::builder()
            .label("Connect")
            .css_classes(["suggested-action"])
            .build();

        container.append(&label);
        container.append(&entry);
        container.append(&connect_button);

        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::None);

        let popover = Popover::builder()
            .position(PositionType::Bottom)
            .autohide(false)
            .has_arrow(false)
            .child(&list)
            .build();
        popover.set_parent(&entry);
        // Manually parented widgets must be unparented on teardown or
        // GTK warns at dispose time
        {
            let popover = popover.clone();
            entry.connect_destroy(move |_| popover.unparent());
        }

        let completions: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let applying = Rc::new(Cell::new(false));

        // Filter history by prefix on every edit
        {
            let list = list.clone();
            let popover = popover.clone();
            let completions = completions.clone();
            let applying = applying.clone();
            entry.connect_changed(move |entry| {
                if applying.get() {
                    return;
                }
                refilter(entry, &list, &popover, &completions.borrow());
            });
        }

        // Clicking a suggestion fills the entry
        {
            let entry = entry.clone();
            let popover = popover.clone();
            let applying = applying.clone();
            list.connect_row_activated(move |_, row| {
                if let Some(label) = row.child().and_downcast::<Label>() {
                    applying.set(true);
                    entry.set_text(&label.text());
                    entry.set_position(-1);
                    applying.set(false);
                }
                popover.popdown();
            });
        }

        Self {
            container,
            entry,
            connect_button,
            completions,
            popover,
        }
    }

    /// The row widget to pack into the window
    #[must_use]
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// The entered hostname text
    #[must_use]
    pub fn text(&self) -> String {
        self.entry.text().to_string()
    }

    /// Replaces the autocomplete source with a fresh history snapshot
    pub fn set_completions(&self, items: &[String]) {
        *self.completions.borrow_mut() = items.to_vec();
    }

    /// Runs `handler` with the entered text when the connect button is
    /// clicked or Enter is pressed in the entry
    pub fn connect_activated<F: Fn(String) + 'static>(&self, handler: F) {
        let handler = Rc::new(handler);

        {
            let entry = self.entry.clone();
            let popover = self.popover.clone();
            let handler = handler.clone();
            self.connect_button.connect_clicked(move |_| {
                popover.popdown();
                handler(entry.text().to_string());
            });
        }
        {
            let popover = self.popover.clone();
            let handler = handler.clone();
            self.entry.connect_activate(move |entry| {
                // Enter while the popover is open should only connect
                popover.popdown();
                handler(entry.text().to_string());
            });
        }
    }
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuilds the suggestion list for the current entry text
fn refilter(entry: &Entry, list: &ListBox, popover: &Popover, completions: &[String]) {
    while let Some(row) = list.row_at_index(0) {
        list.remove(&row);
    }

    let typed = entry.text().to_string();
    if typed.is_empty() {
        popover.popdown();
        return;
    }

    let mut shown: Vec<&str> = Vec::new();
    for host in completions {
        if host.starts_with(&typed) && host != &typed && !shown.contains(&host.as_str()) {
            shown.push(host);
            if shown.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }

    if shown.is_empty() {
        popover.popdown();
        return;
    }

    for host in shown {
        let label = Label::builder()
            .label(host)
            .halign(gtk4::Align::Start)
            .build();
        list.append(&label);
    }
    popover.popup();
}
