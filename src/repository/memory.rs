//! In-memory repository backing the lover directory.
//!
//! The directory is seeded once at startup and only read afterwards, so a
//! plain cloneable value shared via `web::Data` is sufficient.

use crate::domain::{city::City, lover::Lover};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CityReader, LoverListQuery, LoverReader};

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lovers: Vec<Lover>,
    cities: Vec<City>,
}

impl InMemoryRepository {
    pub fn new(lovers: Vec<Lover>, cities: Vec<City>) -> Self {
        Self { lovers, cities }
    }
}

impl LoverReader for InMemoryRepository {
    fn list_lovers(&self, query: LoverListQuery) -> RepositoryResult<(usize, Vec<Lover>)> {
        let name_like = query.name_like.as_deref().map(str::to_lowercase);

        let mut matches: Vec<Lover> = self
            .lovers
            .iter()
            .filter(|lover| match &name_like {
                Some(needle) => lover.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|lover| match &query.city {
                Some(code) => lover.city_code.as_deref() == Some(code.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        // Unknown sort fields leave the seeded order untouched.
        match query.sort.as_deref() {
            Some("name") => matches.sort_by(|a, b| a.name.cmp(&b.name)),
            Some("mark") => matches.sort_by(|a, b| a.mark.total_cmp(&b.mark)),
            _ => {}
        }
        if query.sort.is_some() && query.order.as_deref() == Some("desc") {
            matches.reverse();
        }

        let total = matches.len();

        let items = match query.pagination {
            Some(pagination) => {
                let page = pagination.page.max(1);
                matches
                    .into_iter()
                    .skip((page - 1) * pagination.per_page)
                    .take(pagination.per_page)
                    .collect()
            }
            None => matches,
        };

        Ok((total, items))
    }
}

impl CityReader for InMemoryRepository {
    fn list_cities(&self) -> RepositoryResult<Vec<City>> {
        Ok(self.cities.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn lover(id: i32, name: &str, city: Option<&str>, mark: f32) -> Lover {
        Lover {
            id,
            name: name.to_string(),
            city_code: city.map(str::to_string),
            mark,
            created_at: NaiveDateTime::default(),
        }
    }

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(
            vec![
                lover(1, "Lan Anh", Some("HN"), 82.5),
                lover(2, "Minh", Some("HCM"), 91.0),
                lover(3, "Hoàng Anh", Some("HN"), 67.25),
                lover(4, "Thu", None, 74.0),
            ],
            vec![
                City::new("HN", "Hà Nội"),
                City::new("HCM", "Hồ Chí Minh"),
            ],
        )
    }

    fn names(lovers: &[Lover]) -> Vec<&str> {
        lovers.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring_match() {
        let (total, lovers) = repo()
            .list_lovers(LoverListQuery::new().name_like("anh"))
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(names(&lovers), vec!["Lan Anh", "Hoàng Anh"]);
    }

    #[test]
    fn empty_name_filter_matches_every_profile() {
        let (total, _) = repo()
            .list_lovers(LoverListQuery::new().name_like(""))
            .unwrap();
        assert_eq!(total, 4);
    }

    #[test]
    fn city_filter_matches_the_code_exactly() {
        let (total, lovers) = repo()
            .list_lovers(LoverListQuery::new().city("HN"))
            .unwrap();
        assert_eq!(total, 2);
        assert!(lovers.iter().all(|l| l.city_code.as_deref() == Some("HN")));
    }

    #[test]
    fn sorts_by_mark_descending() {
        let (_, lovers) = repo()
            .list_lovers(LoverListQuery::new().sort("mark", Some("desc")))
            .unwrap();
        assert_eq!(names(&lovers), vec!["Minh", "Lan Anh", "Thu", "Hoàng Anh"]);
    }

    #[test]
    fn unknown_sort_field_keeps_the_seeded_order() {
        let (_, lovers) = repo()
            .list_lovers(LoverListQuery::new().sort("age", Some("asc")))
            .unwrap();
        assert_eq!(names(&lovers), vec!["Lan Anh", "Minh", "Hoàng Anh", "Thu"]);
    }

    #[test]
    fn pagination_reports_the_unpaged_total() {
        let (total, lovers) = repo()
            .list_lovers(LoverListQuery::new().sort("name", None).paginate(2, 3))
            .unwrap();
        assert_eq!(total, 4);
        assert_eq!(names(&lovers), vec!["Thu"]);
    }

    #[test]
    fn filters_compose() {
        let (total, lovers) = repo()
            .list_lovers(
                LoverListQuery::new()
                    .name_like("anh")
                    .city("HN")
                    .sort("mark", Some("asc")),
            )
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(names(&lovers), vec!["Hoàng Anh", "Lan Anh"]);
    }

    #[test]
    fn cities_come_back_in_configured_order() {
        let cities = repo().list_cities().unwrap();
        assert_eq!(
            cities.iter().map(|c| c.code.as_str()).collect::<Vec<_>>(),
            vec!["HN", "HCM"]
        );
    }
}
