mod request_query;
mod request_repository;

pub use request_query::{RequestQuery, RequestQueryError};
pub use request_repository::{
    NewCommission, NewRequest, RequestRepository, RequestRepositoryError,
};
