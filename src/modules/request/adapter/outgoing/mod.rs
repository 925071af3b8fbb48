pub mod request_query_postgres;
pub mod request_repository_postgres;
pub mod sea_orm_entity;

pub use request_query_postgres::RequestQueryPostgres;
pub use request_repository_postgres::RequestRepositoryPostgres;
