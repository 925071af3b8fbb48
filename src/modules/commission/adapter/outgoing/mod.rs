pub mod commission_query_postgres;
pub mod commission_repository_postgres;
pub mod sea_orm_entity;

pub use commission_query_postgres::CommissionQueryPostgres;
pub use commission_repository_postgres::CommissionRepositoryPostgres;
