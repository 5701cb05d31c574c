//! State shaping for the lover list filter form.
//!
//! The page owns the canonical [`ListParams`] snapshot; each user
//! interaction is translated here into a fresh snapshot which is handed
//! back to the page through a callback. Nothing in this module mutates the
//! current snapshot or talks to a data source.

use crate::domain::list_params::ListParams;
use crate::domain::sort;

/// Sets the name filter and returns to the first page.
///
/// An empty search text is kept as-is; "searched for nothing" and "no
/// search" stay distinguishable.
pub fn apply_name_search(filter: &ListParams, text: &str) -> ListParams {
    ListParams {
        name_like: Some(text.to_string()),
        page: Some(1),
        ..filter.clone()
    }
}

/// Selects a city (empty code clears the filter) and returns to the first
/// page.
pub fn apply_city_filter(filter: &ListParams, code: &str) -> ListParams {
    ListParams {
        city: Some(code.to_string()).filter(|c| !c.is_empty()),
        page: Some(1),
        ..filter.clone()
    }
}

/// Applies a composite `<field>.<direction>` sort value.
///
/// The page number is left alone, unlike every other operation here; the
/// original form behaved that way and callers depend on it.
pub fn apply_sort(filter: &ListParams, composite: &str) -> ListParams {
    let (field, direction) = sort::parse(composite);
    ListParams {
        sort: field,
        order: direction,
        ..filter.clone()
    }
}

/// Drops every filter and returns to the first page.
pub fn clear_filters(filter: &ListParams) -> ListParams {
    ListParams {
        page: Some(1),
        sort: None,
        order: None,
        city: None,
        name_like: None,
        ..filter.clone()
    }
}

pub type FilterCallback<'a> = Box<dyn FnMut(ListParams) + 'a>;

/// The filter form's controller.
///
/// Holds a read-only borrow of the current snapshot plus the optional
/// observers the page registered. A missing observer turns the matching
/// operation into a silent no-op; search edits and the remaining edits can
/// be routed to different observers.
pub struct FilterController<'a> {
    filter: &'a ListParams,
    on_change: Option<FilterCallback<'a>>,
    on_search_change: Option<FilterCallback<'a>>,
    on_reset_search_input: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> FilterController<'a> {
    pub fn new(filter: &'a ListParams) -> Self {
        Self {
            filter,
            on_change: None,
            on_search_change: None,
            on_reset_search_input: None,
        }
    }

    /// Observer for city, sort and clear edits.
    pub fn on_change(mut self, callback: impl FnMut(ListParams) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Observer for search-box edits.
    pub fn on_search_change(mut self, callback: impl FnMut(ListParams) + 'a) -> Self {
        self.on_search_change = Some(Box::new(callback));
        self
    }

    /// Hook fired by [`Self::handle_clear_filter`] so the page can blank a
    /// bound search input; display-state only, never part of the snapshot.
    pub fn on_reset_search_input(mut self, hook: impl FnMut() + 'a) -> Self {
        self.on_reset_search_input = Some(Box::new(hook));
        self
    }

    pub fn handle_search_change(&mut self, text: &str) {
        let Some(callback) = self.on_search_change.as_mut() else {
            return;
        };
        callback(apply_name_search(self.filter, text));
    }

    pub fn handle_city_change(&mut self, code: &str) {
        let Some(callback) = self.on_change.as_mut() else {
            return;
        };
        callback(apply_city_filter(self.filter, code));
    }

    pub fn handle_sort_change(&mut self, composite: &str) {
        let Some(callback) = self.on_change.as_mut() else {
            return;
        };
        callback(apply_sort(self.filter, composite));
    }

    pub fn handle_clear_filter(&mut self) {
        let Some(callback) = self.on_change.as_mut() else {
            return;
        };
        callback(clear_filters(self.filter));
        if let Some(reset) = self.on_reset_search_input.as_mut() {
            reset();
        }
    }
}
