//! Event payloads posted by the lover list filter form.
//!
//! Each control submits its own tiny form; the current filter snapshot
//! travels alongside in the query string. None of these values are
//! validated, every submission is treated as a legitimate UI event.

use serde::Deserialize;

#[derive(Deserialize)]
/// A keystroke in the name search box.
pub struct SearchForm {
    #[serde(default)]
    pub name_like: String,
}

#[derive(Deserialize)]
/// A pick in the city selector; empty means "all cities".
pub struct CityFilterForm {
    #[serde(default)]
    pub city: String,
}

#[derive(Deserialize)]
/// A pick in the sort selector, as a composite `<field>.<direction>`
/// value; empty means "no sort".
pub struct SortForm {
    #[serde(default)]
    pub sort_by: String,
}
