mod commission_query;
mod commission_repository;

pub use commission_query::{CommissionQuery, CommissionQueryError};
pub use commission_repository::{
    CommissionChanges, CommissionRepository, CommissionRepositoryError, NewCommissionUpdate,
};
