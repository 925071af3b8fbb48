pub mod profile_query_postgres;
pub mod profile_repository_postgres;

pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
