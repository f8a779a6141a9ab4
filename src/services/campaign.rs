use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{campaign, prelude::*};
use crate::services::validation::{
    validate_allocated_budget, validate_campaign_name, validate_campaign_outreach,
    validate_start_date, validate_target_leads,
};
use crate::services::{ProjectService, ServiceError};

#[derive(Clone)]
pub struct CampaignService {
    db: DatabaseConnection,
    project_service: ProjectService,
}

impl CampaignService {
    pub fn new(db: DatabaseConnection, project_service: ProjectService) -> Self {
        Self {
            db,
            project_service,
        }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create a new campaign under a project
    pub async fn create_campaign(
        &self,
        project_id: Uuid,
        name: &str,
        start_date: NaiveDate,
        target_leads: i32,
        allocated_budget: Decimal,
        target_outreach: Option<i32>,
    ) -> Result<campaign::Model, ServiceError> {
        validate_campaign_name(name)?;
        validate_start_date(start_date)?;
        validate_target_leads(target_leads)?;
        validate_allocated_budget(allocated_budget)?;
        let target_outreach = target_outreach.unwrap_or(0);
        validate_campaign_outreach(target_outreach)?;

        // Verify the parent project exists
        self.project_service
            .get_project(project_id)
            .await?
            .ok_or(ServiceError::NotFound("Project"))?;

        let new_campaign = campaign::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id),
            name: Set(name.trim().to_string()),
            start_date: Set(start_date),
            target_leads: Set(target_leads),
            allocated_budget: Set(allocated_budget),
            target_outreach: Set(target_outreach),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let campaign = new_campaign.insert(&self.db).await?;
        Ok(campaign)
    }

    pub async fn get_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Option<campaign::Model>, ServiceError> {
        let campaign = Campaign::find_by_id(campaign_id).one(&self.db).await?;
        Ok(campaign)
    }

    /// Campaigns for a project, oldest first (tab order in the dashboard).
    pub async fn get_project_campaigns(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<campaign::Model>, ServiceError> {
        let campaigns = Campaign::find()
            .filter(campaign::Column::ProjectId.eq(project_id))
            .order_by_asc(campaign::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(campaigns)
    }

    /// Update campaign fields; each supplied field is validated before the write.
    pub async fn update_campaign(
        &self,
        campaign_id: Uuid,
        name: Option<String>,
        start_date: Option<NaiveDate>,
        target_leads: Option<i32>,
        allocated_budget: Option<Decimal>,
        target_outreach: Option<i32>,
    ) -> Result<campaign::Model, ServiceError> {
        let campaign = Campaign::find_by_id(campaign_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Campaign"))?;

        let mut campaign_active: campaign::ActiveModel = campaign.into();

        if let Some(name) = name {
            validate_campaign_name(&name)?;
            campaign_active.name = Set(name.trim().to_string());
        }

        if let Some(start_date) = start_date {
            validate_start_date(start_date)?;
            campaign_active.start_date = Set(start_date);
        }

        if let Some(target_leads) = target_leads {
            validate_target_leads(target_leads)?;
            campaign_active.target_leads = Set(target_leads);
        }

        if let Some(allocated_budget) = allocated_budget {
            validate_allocated_budget(allocated_budget)?;
            campaign_active.allocated_budget = Set(allocated_budget);
        }

        if let Some(target_outreach) = target_outreach {
            validate_campaign_outreach(target_outreach)?;
            campaign_active.target_outreach = Set(target_outreach);
        }

        campaign_active.updated_at = Set(Utc::now().into());

        let updated_campaign = campaign_active.update(&self.db).await?;
        Ok(updated_campaign)
    }

    /// Delete a campaign; its weekly entries cascade.
    pub async fn delete_campaign(&self, campaign_id: Uuid) -> Result<(), ServiceError> {
        let campaign = Campaign::find_by_id(campaign_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Campaign"))?;

        Campaign::delete_by_id(campaign.id).exec(&self.db).await?;
        Ok(())
    }
}
