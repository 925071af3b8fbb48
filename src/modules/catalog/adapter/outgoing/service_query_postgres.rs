use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{service_options, services};
use crate::catalog::application::domain::entities::{Service, ServiceOption};
use crate::catalog::application::ports::outgoing::{ServiceQuery, ServiceQueryError};

#[derive(Debug, Clone)]
pub struct ServiceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn active_options(
        &self,
        service_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<ServiceOption>>, ServiceQueryError> {
        if service_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = service_options::Entity::find()
            .filter(service_options::Column::ServiceId.is_in(service_ids))
            .filter(service_options::Column::IsActive.eq(true))
            .order_by_asc(service_options::Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| ServiceQueryError::DatabaseError(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<ServiceOption>> = HashMap::new();
        for model in models {
            grouped
                .entry(model.service_id)
                .or_default()
                .push(model.into());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl ServiceQuery for ServiceQueryPostgres {
    async fn list_active(&self) -> Result<Vec<Service>, ServiceQueryError> {
        let models = services::Entity::find()
            .filter(services::Column::IsActive.eq(true))
            .order_by_asc(services::Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| ServiceQueryError::DatabaseError(e.to_string()))?;

        let mut options = self
            .active_options(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let opts = options.remove(&m.id).unwrap_or_default();
                m.to_domain(opts)
            })
            .collect())
    }

    async fn find_active(&self, service_id: Uuid) -> Result<Option<Service>, ServiceQueryError> {
        let Some(model) = services::Entity::find_by_id(service_id)
            .filter(services::Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| ServiceQueryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let options = self
            .active_options(vec![model.id])
            .await?
            .remove(&model.id)
            .unwrap_or_default();

        Ok(Some(model.to_domain(options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn service_model(name: &str) -> services::Model {
        services::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            base_price: 35.0,
            is_active: true,
        }
    }

    fn option_model(service_id: Uuid, name: &str, formula: &str) -> service_options::Model {
        service_options::Model {
            id: Uuid::new_v4(),
            service_id,
            name: name.to_string(),
            description: None,
            price_formula: formula.to_string(),
            min_value: 0,
            max_value: 10,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn list_active_attaches_options_per_service() {
        let portrait = service_model("Portrait");
        let sketch = service_model("Sketch");
        let opt = option_model(portrait.id, "Extra Poses", "+5+[value]");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![portrait.clone(), sketch.clone()]])
            .append_query_results(vec![vec![opt.clone()]])
            .into_connection();

        let query = ServiceQueryPostgres::new(Arc::new(db));
        let services = query.list_active().await.unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "Portrait");
        assert_eq!(services[0].options.len(), 1);
        assert_eq!(services[0].options[0].price_formula, "+5+[value]");
        assert!(services[1].options.is_empty());
    }

    #[tokio::test]
    async fn list_active_empty_skips_option_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<services::Model>::new()])
            .into_connection();

        let query = ServiceQueryPostgres::new(Arc::new(db));

        assert!(query.list_active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_active_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<services::Model>::new()])
            .into_connection();

        let query = ServiceQueryPostgres::new(Arc::new(db));

        assert!(query.find_active(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_active_with_options() {
        let service = service_model("Portrait");
        let opt = option_model(service.id, "Alternatives", "+3*[value]");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![service.clone()]])
            .append_query_results(vec![vec![opt]])
            .into_connection();

        let query = ServiceQueryPostgres::new(Arc::new(db));
        let found = query.find_active(service.id).await.unwrap().unwrap();

        assert_eq!(found.id, service.id);
        assert_eq!(found.options[0].name, "Alternatives");
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".into())])
            .into_connection();

        let query = ServiceQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_active().await,
            Err(ServiceQueryError::DatabaseError(msg)) if msg.contains("timeout")
        ));
    }
}
