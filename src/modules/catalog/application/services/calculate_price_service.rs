use async_trait::async_trait;

use crate::catalog::application::{
    domain::pricing::{PriceCalculator, PriceQuote},
    ports::{
        incoming::use_cases::{CalculatePriceCommand, CalculatePriceError, CalculatePriceUseCase},
        outgoing::ServiceQuery,
    },
};

#[derive(Debug, Clone)]
pub struct CalculatePriceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> CalculatePriceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CalculatePriceUseCase for CalculatePriceService<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CalculatePriceCommand,
    ) -> Result<PriceQuote, CalculatePriceError> {
        let service = self
            .query
            .find_active(command.service_id())
            .await
            .map_err(|e| CalculatePriceError::QueryFailed(e.to_string()))?
            .ok_or(CalculatePriceError::ServiceNotFound)?;

        let quote = PriceCalculator::new(service.base_price, &service.options)
            .quote(command.selections(), command.is_vip());

        tracing::debug!(
            service_id = %service.id,
            total = quote.total_price,
            complexity = %quote.complexity,
            "Price calculated"
        );

        Ok(quote)
    }
}
