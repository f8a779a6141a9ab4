use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::{infrastructure, prelude::*};
use crate::services::validation::{validate_linkedin_accounts, validate_mailboxes};
use crate::services::{ProjectService, ServiceError};

#[derive(Clone)]
pub struct InfrastructureService {
    db: DatabaseConnection,
    project_service: ProjectService,
}

impl InfrastructureService {
    pub fn new(db: DatabaseConnection, project_service: ProjectService) -> Self {
        Self {
            db,
            project_service,
        }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert-or-replace the infrastructure record for a project. Each
    /// project holds at most one record, keyed on project_id.
    pub async fn upsert_infrastructure(
        &self,
        project_id: Uuid,
        mailboxes: i32,
        linkedin_accounts: i32,
    ) -> Result<infrastructure::Model, ServiceError> {
        validate_mailboxes(mailboxes)?;
        validate_linkedin_accounts(linkedin_accounts)?;

        // Verify the parent project exists
        self.project_service
            .get_project(project_id)
            .await?
            .ok_or(ServiceError::NotFound("Project"))?;

        let record = infrastructure::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id),
            mailboxes: Set(mailboxes),
            linkedin_accounts: Set(linkedin_accounts),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let record = Infrastructure::insert(record)
            .on_conflict(
                OnConflict::column(infrastructure::Column::ProjectId)
                    .update_columns([
                        infrastructure::Column::Mailboxes,
                        infrastructure::Column::LinkedinAccounts,
                        infrastructure::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(record)
    }

    pub async fn get_project_infrastructure(
        &self,
        project_id: Uuid,
    ) -> Result<Option<infrastructure::Model>, ServiceError> {
        let record = Infrastructure::find()
            .filter(infrastructure::Column::ProjectId.eq(project_id))
            .one(&self.db)
            .await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn project_row(id: Uuid) -> project::Model {
        project::Model {
            id,
            name: "Atlas Outreach".to_string(),
            client_name: "Atlas Corp".to_string(),
            brand_color: "#6366f1".to_string(),
            logo_url: String::new(),
            project_type: "lead_generation".to_string(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn infra_row(project_id: Uuid, mailboxes: i32) -> infrastructure::Model {
        infrastructure::Model {
            id: Uuid::new_v4(),
            project_id,
            mailboxes,
            linkedin_accounts: 2,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    // A project keeps a single capacity record, so every write carries the
    // project_id conflict clause that turns a repeat into an update.
    #[tokio::test]
    async fn repeated_writes_target_the_same_project_record() {
        let project_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_row(project_id)]])
            .append_query_results([vec![infra_row(project_id, 10)]])
            .append_query_results([vec![project_row(project_id)]])
            .append_query_results([vec![infra_row(project_id, 24)]])
            .into_connection();

        let service = InfrastructureService::new(db.clone(), ProjectService::new(db.clone()));

        service.upsert_infrastructure(project_id, 10, 2).await.unwrap();
        let second = service.upsert_infrastructure(project_id, 24, 2).await.unwrap();
        assert_eq!(second.mailboxes, 24);

        // Statement text is only reachable through the log's Debug output,
        // where the SQL's own quotes come out backslash-escaped.
        let log = db.into_transaction_log();
        let inserts: Vec<String> = log
            .iter()
            .map(|t| format!("{t:?}"))
            .filter(|sql| sql.contains(r#"INSERT INTO \"infrastructure\""#))
            .collect();
        assert_eq!(inserts.len(), 2);
        for sql in &inserts {
            assert!(
                sql.contains(r#"ON CONFLICT (\"project_id\") DO UPDATE"#),
                "insert missing the project-key conflict clause: {sql}"
            );
            assert!(sql.contains(r#"\"excluded\".\"mailboxes\""#));
            assert!(sql.contains(r#"\"excluded\".\"linkedin_accounts\""#));
        }
    }

    #[tokio::test]
    async fn upsert_for_unknown_project_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<project::Model>::new()])
            .into_connection();

        let service = InfrastructureService::new(db.clone(), ProjectService::new(db));

        let err = service
            .upsert_infrastructure(Uuid::new_v4(), 10, 2)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Project")));
    }
}
