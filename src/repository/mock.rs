//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::{city::City, lover::Lover};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CityReader, LoverListQuery, LoverReader};

mock! {
    pub Repository {}

    impl LoverReader for Repository {
        fn list_lovers(&self, query: LoverListQuery) -> RepositoryResult<(usize, Vec<Lover>)>;
    }

    impl CityReader for Repository {
        fn list_cities(&self) -> RepositoryResult<Vec<City>>;
    }
}
