use crate::domain::list_params::ListParams;
use crate::dto::lovers::{LoversPageData, LoversResponse};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CityReader, LoverListQuery, LoverReader};
use crate::services::ServiceResult;

/// Translates the page's filter snapshot into a repository query.
fn list_query(params: &ListParams) -> LoverListQuery {
    let mut query = LoverListQuery::new();
    if let Some(text) = &params.name_like {
        query = query.name_like(text);
    }
    if let Some(code) = &params.city {
        query = query.city(code);
    }
    if let Some(field) = &params.sort {
        query = query.sort(field, params.order.as_deref());
    }
    query
}

/// Loads one page of the lover directory for the list template.
pub fn load_lovers_page<R>(repo: &R, params: &ListParams) -> ServiceResult<LoversPageData>
where
    R: LoverReader + CityReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let query = list_query(params).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, lovers) = repo.list_lovers(query)?;
    let city_list = repo.list_cities()?;

    let lovers = Paginated::new(lovers, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE));

    Ok(LoversPageData {
        lovers,
        total,
        city_list,
        filter: params.clone(),
    })
}

/// Returns the filtered directory page for the JSON API.
pub fn list_lovers<R>(repo: &R, params: &ListParams) -> ServiceResult<LoversResponse>
where
    R: LoverReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let query = list_query(params).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, lovers) = repo.list_lovers(query)?;

    Ok(LoversResponse { total, lovers })
}
