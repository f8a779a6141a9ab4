use async_graphql::*;
use uuid::Uuid;

use crate::graphql::types::{
    Campaign, CreateCampaignInput, CreateProjectInput, Infrastructure, MessageResponse, Project,
    UpdateCampaignInput, UpdateProjectInput, UpsertInfrastructureInput, UpsertWeeklyEntryInput,
    WeeklyEntry,
};
use crate::services::{
    CampaignService, InfrastructureService, ProjectService, ProjectType, WeeklyEntryService,
};

pub struct MutationRoot;

fn parse_project_type(s: Option<String>) -> Result<Option<ProjectType>> {
    match s {
        None => Ok(None),
        Some(s) => ProjectType::from_str(&s)
            .map(Some)
            .ok_or_else(|| Error::new(format!("Unknown project type: {}", s))),
    }
}

#[Object]
impl MutationRoot {
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        input: CreateProjectInput,
    ) -> Result<Project> {
        let project_service = ctx.data::<ProjectService>()?;
        let project_type = parse_project_type(input.project_type)?;

        let project = project_service
            .create_project(
                &input.name,
                input.client_name,
                input.brand_color,
                input.logo_url,
                project_type,
            )
            .await
            .map_err(|e| Error::new(format!("Failed to create project: {}", e)))?;

        Ok(project.into())
    }

    async fn update_project(
        &self,
        ctx: &Context<'_>,
        project_id: Uuid,
        input: UpdateProjectInput,
    ) -> Result<Project> {
        let project_service = ctx.data::<ProjectService>()?;
        let project_type = parse_project_type(input.project_type)?;

        let project = project_service
            .update_project(
                project_id,
                input.name,
                input.client_name,
                input.brand_color,
                input.logo_url,
                project_type,
            )
            .await
            .map_err(|e| Error::new(format!("Failed to update project: {}", e)))?;

        Ok(project.into())
    }

    async fn delete_project(&self, ctx: &Context<'_>, project_id: Uuid) -> Result<MessageResponse> {
        let project_service = ctx.data::<ProjectService>()?;

        project_service
            .delete_project(project_id)
            .await
            .map_err(|e| Error::new(format!("Failed to delete project: {}", e)))?;

        Ok(MessageResponse {
            message: "Project deleted".to_string(),
        })
    }

    async fn create_campaign(
        &self,
        ctx: &Context<'_>,
        input: CreateCampaignInput,
    ) -> Result<Campaign> {
        let campaign_service = ctx.data::<CampaignService>()?;

        let campaign = campaign_service
            .create_campaign(
                input.project_id,
                &input.name,
                input.start_date,
                input.target_leads,
                input.allocated_budget,
                input.target_outreach,
            )
            .await
            .map_err(|e| Error::new(format!("Failed to create campaign: {}", e)))?;

        Ok(campaign.into())
    }

    async fn update_campaign(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
        input: UpdateCampaignInput,
    ) -> Result<Campaign> {
        let campaign_service = ctx.data::<CampaignService>()?;

        let campaign = campaign_service
            .update_campaign(
                campaign_id,
                input.name,
                input.start_date,
                input.target_leads,
                input.allocated_budget,
                input.target_outreach,
            )
            .await
            .map_err(|e| Error::new(format!("Failed to update campaign: {}", e)))?;

        Ok(campaign.into())
    }

    async fn delete_campaign(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
    ) -> Result<MessageResponse> {
        let campaign_service = ctx.data::<CampaignService>()?;

        campaign_service
            .delete_campaign(campaign_id)
            .await
            .map_err(|e| Error::new(format!("Failed to delete campaign: {}", e)))?;

        Ok(MessageResponse {
            message: "Campaign deleted".to_string(),
        })
    }

    async fn upsert_weekly_entry(
        &self,
        ctx: &Context<'_>,
        input: UpsertWeeklyEntryInput,
    ) -> Result<WeeklyEntry> {
        let weekly_service = ctx.data::<WeeklyEntryService>()?;

        let entry = weekly_service
            .upsert_entry(
                input.campaign_id,
                input.week_number,
                input.leads_contacted,
                input.replies,
                input.appointments,
                input.target_outreach,
            )
            .await
            .map_err(|e| Error::new(format!("Failed to save weekly entry: {}", e)))?;

        Ok(entry.into())
    }

    async fn upsert_infrastructure(
        &self,
        ctx: &Context<'_>,
        input: UpsertInfrastructureInput,
    ) -> Result<Infrastructure> {
        let infra_service = ctx.data::<InfrastructureService>()?;

        let infra = infra_service
            .upsert_infrastructure(input.project_id, input.mailboxes, input.linkedin_accounts)
            .await
            .map_err(|e| Error::new(format!("Failed to save infrastructure: {}", e)))?;

        Ok(infra.into())
    }
}
