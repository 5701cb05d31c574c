use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::domain::auth::AuthStore;
use crate::domain::list_params::ListParams;
use crate::forms::lovers::{CityFilterForm, SearchForm, SortForm};
use crate::middleware::SessionAuthStore;
use crate::repository::memory::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::filters::FilterController;
use crate::services::lovers::{list_lovers, load_lovers_page};

/// Builds the list page URL carrying the given snapshot.
fn list_url(params: &ListParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

#[get("/")]
pub async fn show_lovers(
    params: web::Query<ListParams>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();

    let data = match load_lovers_page(repo.get_ref(), &params) {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to load lovers page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // The pager links append their own `_page`.
    let page_base = ListParams {
        page: None,
        ..data.filter.clone()
    };

    let mut context = base_context(&flash_messages, "lovers");
    context.insert("lovers", &data.lovers);
    context.insert("total", &data.total);
    context.insert("city_list", &data.city_list);
    context.insert("filter", &data.filter);
    context.insert("sort_value", &data.sort_value());
    context.insert("current_query", &data.filter.to_query_string());
    context.insert("page_base_query", &page_base.to_query_string());

    render_template(&tera, "lovers/index.html", &context)
}

/// A keystroke in the name search box.
#[post("/filters/search")]
pub async fn filter_search(
    params: web::Query<ListParams>,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    let current = params.into_inner();
    let mut next = None;

    let mut controller =
        FilterController::new(&current).on_search_change(|params| next = Some(params));
    controller.handle_search_change(&form.name_like);
    drop(controller);

    match next {
        Some(params) => redirect(&list_url(&params)),
        None => redirect(&list_url(&current)),
    }
}

/// A pick in the city selector.
#[post("/filters/city")]
pub async fn filter_city(
    params: web::Query<ListParams>,
    web::Form(form): web::Form<CityFilterForm>,
) -> impl Responder {
    let current = params.into_inner();
    let mut next = None;

    let mut controller = FilterController::new(&current).on_change(|params| next = Some(params));
    controller.handle_city_change(&form.city);
    drop(controller);

    match next {
        Some(params) => redirect(&list_url(&params)),
        None => redirect(&list_url(&current)),
    }
}

/// A pick in the sort selector.
#[post("/filters/sort")]
pub async fn filter_sort(
    params: web::Query<ListParams>,
    web::Form(form): web::Form<SortForm>,
) -> impl Responder {
    let current = params.into_inner();
    let mut next = None;

    let mut controller = FilterController::new(&current).on_change(|params| next = Some(params));
    controller.handle_sort_change(&form.sort_by);
    drop(controller);

    match next {
        Some(params) => redirect(&list_url(&params)),
        None => redirect(&list_url(&current)),
    }
}

/// The "reset filters" button.
#[post("/filters/clear")]
pub async fn filter_clear(params: web::Query<ListParams>) -> impl Responder {
    let current = params.into_inner();
    let mut next = None;

    let mut controller = FilterController::new(&current).on_change(|params| next = Some(params));
    controller.handle_clear_filter();
    drop(controller);

    match next {
        Some(params) => redirect(&list_url(&params)),
        None => redirect(&list_url(&current)),
    }
}

#[get("/v1/lovers")]
pub async fn api_v1_lovers(
    params: web::Query<ListParams>,
    session: Session,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    if !SessionAuthStore::new(session).has_token() {
        return HttpResponse::Unauthorized().finish();
    }

    match list_lovers(repo.get_ref(), &params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            error!("Failed to list lovers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
