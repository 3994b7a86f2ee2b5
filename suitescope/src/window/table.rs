//! Resource table widget
//!
//! Wraps a `ColumnView` whose columns are rebuilt from the header labels
//! of each [`ResourcePage`]. Repopulation is always a full clear and
//! rebuild; the browser state is the source of truth and the widget is a
//! projection of it.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    ColumnView, ColumnViewColumn, Label, ListItem, MultiSelection, ScrolledWindow,
    SignalListItemFactory, gio, glib, pango,
};

use suitescope_core::browser::SelectedCell;
use suitescope_core::models::{ResourcePage, ResourceRow};

/// Multi-row selectable table of resources
pub struct ResourceTable {
    scroller: ScrolledWindow,
    view: ColumnView,
    store: gio::ListStore,
    selection: MultiSelection,
    headers: Rc<RefCell<Vec<String>>>,
}

impl ResourceTable {
    /// Builds an empty table
    #[must_use]
    pub fn new() -> Self {
        let store = gio::ListStore::new::<glib::BoxedAnyObject>();
        let selection = MultiSelection::new(Some(store.clone()));

        let view = ColumnView::builder()
            .model(&selection)
            .reorderable(false)
            .vexpand(true)
            .build();

        let scroller = ScrolledWindow::builder()
            .child(&view)
            .vexpand(true)
            .build();

        Self {
            scroller,
            view,
            store,
            selection,
            headers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The scrollable widget to pack into the window
    #[must_use]
    pub fn widget(&self) -> &ScrolledWindow {
        &self.scroller
    }

    /// The inner column view, for wiring activation signals
    #[must_use]
    pub fn view(&self) -> &ColumnView {
        &self.view
    }

    /// Current column header labels
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.headers.borrow().clone()
    }

    /// Replaces the table contents: columns are rebuilt from the page
    /// headers, rows from the page rows.
    pub fn set_page(&self, page: &ResourcePage) {
        // Full clear first, so a failed fetch leaves an empty table
        self.store.remove_all();
        while let Some(column) = self.view.columns().item(0).and_downcast::<ColumnViewColumn>() {
            self.view.remove_column(&column);
        }
        *self.headers.borrow_mut() = page.columns.clone();

        for (index, title) in page.columns.iter().enumerate() {
            let factory = SignalListItemFactory::new();

            factory.connect_setup(|_, item| {
                let Some(item) = item.downcast_ref::<ListItem>() else {
                    return;
                };
                let label = Label::builder()
                    .halign(gtk4::Align::Start)
                    .ellipsize(pango::EllipsizeMode::End)
                    .build();
                item.set_child(Some(&label));
            });

            factory.connect_bind(move |_, item| {
                let Some(item) = item.downcast_ref::<ListItem>() else {
                    return;
                };
                let Some(object) = item.item().and_downcast::<glib::BoxedAnyObject>() else {
                    return;
                };
                let Some(label) = item.child().and_downcast::<Label>() else {
                    return;
                };
                let row = object.borrow::<ResourceRow>();
                label.set_text(row.cell(index).unwrap_or_default());
            });

            let column = ColumnViewColumn::new(Some(title.as_str()), Some(factory.upcast()));
            column.set_expand(true);
            column.set_resizable(true);
            self.view.append_column(&column);
        }

        for row in &page.rows {
            self.store.append(&glib::BoxedAnyObject::new(row.clone()));
        }
    }

    /// Snapshot of the current selection as `(row, column, text)` cells.
    ///
    /// Selection is row-granular in the widget, so every selected row
    /// contributes all of its cells.
    #[must_use]
    pub fn selected_cells(&self) -> Vec<SelectedCell> {
        let mut cells = Vec::new();
        let bitset = self.selection.selection();

        if let Some((iter, first)) = gtk4::BitsetIter::init_first(&bitset) {
            let mut positions = vec![first];
            positions.extend(iter);
            for position in positions {
                let Some(object) = self
                    .store
                    .item(position)
                    .and_downcast::<glib::BoxedAnyObject>()
                else {
                    continue;
                };
                let row = object.borrow::<ResourceRow>();
                for (column, text) in row.cells.iter().enumerate() {
                    cells.push(SelectedCell {
                        row: position as usize,
                        column,
                        text: text.clone(),
                    });
                }
            }
        }

        cells
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}
