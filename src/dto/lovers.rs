use serde::Serialize;

use crate::domain::{city::City, list_params::ListParams, lover::Lover, sort};
use crate::pagination::Paginated;

/// Aggregated data required to render the lover list page.
pub struct LoversPageData {
    /// Page of profiles plus the pager window.
    pub lovers: Paginated<Lover>,
    /// Total number of profiles matching the filter.
    pub total: usize,
    /// Cities offered by the filter form, in their configured order.
    pub city_list: Vec<City>,
    /// The filter snapshot echoed back to the form controls.
    pub filter: ListParams,
}

impl LoversPageData {
    /// Composite value the sort selector should show as selected.
    pub fn sort_value(&self) -> String {
        sort::format(self.filter.sort.as_deref(), self.filter.order.as_deref())
    }
}

/// Payload returned by the `/api/v1/lovers` endpoint.
#[derive(Debug, Serialize)]
pub struct LoversResponse {
    pub total: usize,
    pub lovers: Vec<Lover>,
}
