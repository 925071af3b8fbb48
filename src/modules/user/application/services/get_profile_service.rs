use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::{
    domain::entities::ProfileOverview,
    ports::{
        incoming::use_cases::{GetProfileError, GetProfileUseCase},
        outgoing::{ProfileQuery, ProfileQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_failed(e: ProfileQueryError) -> GetProfileError {
    GetProfileError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileOverview, GetProfileError> {
        let user = self
            .query
            .find_profile(user_id)
            .await
            .map_err(query_failed)?
            .ok_or(GetProfileError::NotFound)?;

        let commissions = self
            .query
            .list_commissions(user_id)
            .await
            .map_err(query_failed)?;

        Ok(ProfileOverview { user, commissions })
    }
}
