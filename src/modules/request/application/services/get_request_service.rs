use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::request::application::{
    domain::entities::RequestDetail,
    ports::{
        incoming::use_cases::{GetRequestError, GetRequestUseCase},
        outgoing::RequestQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetRequestService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetRequestService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRequestUseCase for GetRequestService<Q>
where
    Q: RequestQuery + Send + Sync,
{
    async fn execute(
        &self,
        request_id: Uuid,
        viewer: UserId,
    ) -> Result<RequestDetail, GetRequestError> {
        let request = self
            .query
            .find_by_id(request_id)
            .await
            .map_err(|e| GetRequestError::QueryFailed(e.to_string()))?
            .ok_or(GetRequestError::NotFound)?;

        if !request.is_owned_by(viewer) {
            tracing::warn!(%request_id, viewer = %viewer, "Request read by non-owner");
            return Err(GetRequestError::Forbidden);
        }

        Ok(request)
    }
}
