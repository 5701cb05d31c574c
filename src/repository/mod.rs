use crate::domain::{city::City, lover::Lover};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters, ordering and paging applied when listing lover profiles.
///
/// Mirrors the list page's query snapshot: an empty `name_like` string is a
/// valid filter that matches everything, and unknown sort fields or
/// directions are carried along without interpretation.
#[derive(Debug, Clone, Default)]
pub struct LoverListQuery {
    pub name_like: Option<String>,
    pub city: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub pagination: Option<Pagination>,
}

impl LoverListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_like(mut self, text: impl Into<String>) -> Self {
        self.name_like = Some(text.into());
        self
    }

    pub fn city(mut self, code: impl Into<String>) -> Self {
        self.city = Some(code.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: Option<&str>) -> Self {
        self.sort = Some(field.into());
        self.order = order.map(str::to_string);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait LoverReader {
    /// Returns the total number of matching profiles and the requested page.
    fn list_lovers(&self, query: LoverListQuery) -> RepositoryResult<(usize, Vec<Lover>)>;
}

pub trait CityReader {
    /// Returns the selectable cities in their configured order.
    fn list_cities(&self) -> RepositoryResult<Vec<City>>;
}
