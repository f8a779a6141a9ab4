use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::{prelude::*, weekly_entry};
use crate::services::validation::{validate_week_number, validate_weekly_count};
use crate::services::{CampaignService, ServiceError};

#[derive(Clone)]
pub struct WeeklyEntryService {
    db: DatabaseConnection,
    campaign_service: CampaignService,
}

impl WeeklyEntryService {
    pub fn new(db: DatabaseConnection, campaign_service: CampaignService) -> Self {
        Self {
            db,
            campaign_service,
        }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert-or-replace the entry for (campaign, week). Writing an existing
    /// week replaces its counters; concurrent writers are last-write-wins.
    pub async fn upsert_entry(
        &self,
        campaign_id: Uuid,
        week_number: i32,
        leads_contacted: i32,
        replies: i32,
        appointments: i32,
        target_outreach: i32,
    ) -> Result<weekly_entry::Model, ServiceError> {
        validate_week_number(week_number)?;
        validate_weekly_count(leads_contacted, "Leads contacted")?;
        validate_weekly_count(replies, "Replies")?;
        validate_weekly_count(appointments, "Appointments")?;
        validate_weekly_count(target_outreach, "Target outreach")?;

        // Verify the parent campaign exists
        self.campaign_service
            .get_campaign(campaign_id)
            .await?
            .ok_or(ServiceError::NotFound("Campaign"))?;

        let entry = weekly_entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            campaign_id: Set(campaign_id),
            week_number: Set(week_number),
            leads_contacted: Set(leads_contacted),
            replies: Set(replies),
            appointments: Set(appointments),
            target_outreach: Set(target_outreach),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let entry = WeeklyEntry::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    weekly_entry::Column::CampaignId,
                    weekly_entry::Column::WeekNumber,
                ])
                .update_columns([
                    weekly_entry::Column::LeadsContacted,
                    weekly_entry::Column::Replies,
                    weekly_entry::Column::Appointments,
                    weekly_entry::Column::TargetOutreach,
                    weekly_entry::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(entry)
    }

    /// Weekly entries for a campaign in week order.
    pub async fn get_campaign_entries(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<weekly_entry::Model>, ServiceError> {
        let entries = WeeklyEntry::find()
            .filter(weekly_entry::Column::CampaignId.eq(campaign_id))
            .order_by_asc(weekly_entry::Column::WeekNumber)
            .all(&self.db)
            .await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::campaign;
    use crate::services::ProjectService;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn campaign_row(id: Uuid) -> campaign::Model {
        campaign::Model {
            id,
            project_id: Uuid::new_v4(),
            name: "Q3 Outbound".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            target_leads: 60_000,
            allocated_budget: Decimal::from(5_200),
            target_outreach: 0,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn entry_row(campaign_id: Uuid, leads: i32) -> weekly_entry::Model {
        weekly_entry::Model {
            id: Uuid::new_v4(),
            campaign_id,
            week_number: 3,
            leads_contacted: leads,
            replies: 0,
            appointments: 0,
            target_outreach: 0,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    // Writing the same (campaign, week) twice must land on one row with the
    // last values, so every insert has to carry the conflict clause that
    // turns the second write into an update of the counter columns.
    #[tokio::test]
    async fn repeated_writes_target_the_same_week_row() {
        let campaign_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![campaign_row(campaign_id)]])
            .append_query_results([vec![entry_row(campaign_id, 100)]])
            .append_query_results([vec![campaign_row(campaign_id)]])
            .append_query_results([vec![entry_row(campaign_id, 250)]])
            .into_connection();

        let campaign_service =
            CampaignService::new(db.clone(), ProjectService::new(db.clone()));
        let service = WeeklyEntryService::new(db.clone(), campaign_service);

        let first = service
            .upsert_entry(campaign_id, 3, 100, 5, 1, 0)
            .await
            .unwrap();
        let second = service
            .upsert_entry(campaign_id, 3, 250, 12, 4, 0)
            .await
            .unwrap();
        assert_eq!(first.week_number, second.week_number);
        assert_eq!(second.leads_contacted, 250);

        // Statement text is only reachable through the log's Debug output,
        // where the SQL's own quotes come out backslash-escaped.
        let log = db.into_transaction_log();
        let inserts: Vec<String> = log
            .iter()
            .map(|t| format!("{t:?}"))
            .filter(|sql| sql.contains(r#"INSERT INTO \"weekly_data\""#))
            .collect();
        assert_eq!(inserts.len(), 2);
        for sql in &inserts {
            assert!(
                sql.contains(r#"ON CONFLICT (\"campaign_id\", \"week_number\") DO UPDATE"#),
                "insert missing the week-key conflict clause: {sql}"
            );
            assert!(sql.contains(r#"\"excluded\".\"leads_contacted\""#));
            assert!(sql.contains(r#"\"excluded\".\"replies\""#));
            assert!(sql.contains(r#"\"excluded\".\"appointments\""#));
        }
    }

    #[tokio::test]
    async fn upsert_for_unknown_campaign_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<campaign::Model>::new()])
            .into_connection();

        let campaign_service =
            CampaignService::new(db.clone(), ProjectService::new(db.clone()));
        let service = WeeklyEntryService::new(db, campaign_service);

        let err = service
            .upsert_entry(Uuid::new_v4(), 3, 100, 5, 1, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Campaign")));
    }
}
