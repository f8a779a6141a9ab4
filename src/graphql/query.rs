use async_graphql::*;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::analytics::{aggregate, budget, funnel, projection, rates, Goals};
use crate::entities::weekly_entry;
use crate::graphql::types::{
    BudgetBreakdown, Campaign, CampaignPerformance, CampaignProjection, CumulativeTrendPoint,
    FunnelBreakdown, GoalsInput, Project, Recommendation, WeeklyPerformance,
};
use crate::services::{CampaignService, ProjectService, WeeklyEntryService};

pub struct QueryRoot;

/// Campaign plus its weekly entries, the input to every derived query.
async fn load_campaign(
    ctx: &Context<'_>,
    campaign_id: Uuid,
) -> Result<(crate::entities::campaign::Model, Vec<weekly_entry::Model>)> {
    let campaign_service = ctx.data::<CampaignService>()?;
    let weekly_service = ctx.data::<WeeklyEntryService>()?;

    let campaign = campaign_service
        .get_campaign(campaign_id)
        .await
        .map_err(|e| Error::new(format!("Failed to fetch campaign: {}", e)))?
        .ok_or_else(|| Error::new("Campaign not found"))?;

    let entries = weekly_service
        .get_campaign_entries(campaign_id)
        .await
        .map_err(|e| Error::new(format!("Failed to fetch weekly entries: {}", e)))?;

    Ok((campaign, entries))
}

fn goals_or_default(goals: Option<GoalsInput>) -> Goals {
    goals.map(Into::into).unwrap_or_default()
}

#[Object]
impl QueryRoot {
    async fn health(&self) -> &str {
        "OK"
    }

    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let project_service = ctx.data::<ProjectService>()?;

        let projects = project_service
            .get_projects()
            .await
            .map_err(|e| Error::new(format!("Failed to fetch projects: {}", e)))?;

        Ok(projects.into_iter().map(|p| p.into()).collect())
    }

    async fn project(&self, ctx: &Context<'_>, project_id: Uuid) -> Result<Option<Project>> {
        let project_service = ctx.data::<ProjectService>()?;

        let project = project_service
            .get_project(project_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch project: {}", e)))?;

        Ok(project.map(|p| p.into()))
    }

    async fn campaign(&self, ctx: &Context<'_>, campaign_id: Uuid) -> Result<Option<Campaign>> {
        let campaign_service = ctx.data::<CampaignService>()?;

        let campaign = campaign_service
            .get_campaign(campaign_id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch campaign: {}", e)))?;

        Ok(campaign.map(|c| c.into()))
    }

    /// Totals, rates, and per-week trend rows, recomputed from the current
    /// weekly entries on every call.
    async fn campaign_performance(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
        goals: Option<GoalsInput>,
    ) -> Result<CampaignPerformance> {
        let goals = goals_or_default(goals);
        let (_, entries) = load_campaign(ctx, campaign_id).await?;

        let totals = aggregate::aggregate(&entries);
        let response_rate = rates::response_rate(totals.total_replies, totals.total_leads);
        let conversion_rate =
            rates::conversion_rate(totals.total_appointments, totals.total_replies);

        let weekly = entries
            .iter()
            .map(|e| WeeklyPerformance {
                week_number: e.week_number,
                leads_contacted: e.leads_contacted,
                replies: e.replies,
                appointments: e.appointments,
                target_outreach: e.target_outreach,
                daily_average: rates::round1(aggregate::daily_average(e.leads_contacted)),
            })
            .collect();

        let cumulative: Vec<CumulativeTrendPoint> =
            aggregate::cumulative_series(&entries, f64::from(goals.target_appointments))
                .into_iter()
                .map(Into::into)
                .collect();

        Ok(CampaignPerformance {
            campaign_id,
            total_leads: totals.total_leads,
            total_replies: totals.total_replies,
            total_appointments: totals.total_appointments,
            weeks_completed: totals.weeks_completed,
            response_rate: rates::round1(response_rate),
            conversion_rate: rates::round1(conversion_rate),
            weekly,
            cumulative,
        })
    }

    async fn budget_allocation(&self, allocated_budget: f64) -> Result<BudgetBreakdown> {
        if allocated_budget <= 0.0 || allocated_budget > 100_000_000.0 {
            return Err(Error::new(
                "Budget must be a positive amount (1-100,000,000)",
            ));
        }
        Ok(budget::allocate(allocated_budget).into())
    }

    /// Goal standing, observed pace, and the 30-day forecast for a campaign.
    async fn goal_projection(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
        goals: Option<GoalsInput>,
    ) -> Result<CampaignProjection> {
        let goals = goals_or_default(goals);
        let (campaign, entries) = load_campaign(ctx, campaign_id).await?;

        let totals = aggregate::aggregate(&entries);
        let response_rate = rates::response_rate(totals.total_replies, totals.total_leads);

        let goal = projection::project_goal(
            f64::from(goals.target_appointments),
            totals.weeks_completed,
            totals.total_appointments as f64,
        );
        let pace = projection::current_pace(&totals, response_rate);

        // The forecast runs on the campaign's own budget when set, else the
        // goal-level budget.
        let monthly_budget = campaign
            .allocated_budget
            .to_f64()
            .filter(|b| *b > 0.0)
            .unwrap_or(goals.allocated_budget);
        let breakdown = budget::allocate(monthly_budget);
        let monthly = projection::project_month(
            breakdown.targeted_leads,
            response_rate,
            totals.weeks_completed,
        );

        Ok(CampaignProjection {
            goal: goal.into(),
            pace: pace.into(),
            monthly: monthly.into(),
        })
    }

    async fn recommendations(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
        goals: Option<GoalsInput>,
    ) -> Result<Vec<Recommendation>> {
        let goals = goals_or_default(goals);
        let (_, entries) = load_campaign(ctx, campaign_id).await?;

        let totals = aggregate::aggregate(&entries);
        let response_rate = rates::response_rate(totals.total_replies, totals.total_leads);
        let conversion_rate =
            rates::conversion_rate(totals.total_appointments, totals.total_replies);

        let recs = crate::analytics::recommend::recommendations(
            &goals,
            &totals,
            response_rate,
            conversion_rate,
        );
        Ok(recs.into_iter().map(Into::into).collect())
    }

    async fn funnel_analysis(
        &self,
        ctx: &Context<'_>,
        campaign_id: Uuid,
        goals: Option<GoalsInput>,
    ) -> Result<FunnelBreakdown> {
        let goals = goals_or_default(goals);
        let (_, entries) = load_campaign(ctx, campaign_id).await?;

        let totals = aggregate::aggregate(&entries);
        let response_rate = rates::response_rate(totals.total_replies, totals.total_leads);
        let conversion_rate =
            rates::conversion_rate(totals.total_appointments, totals.total_replies);

        Ok(funnel::analyze(&goals, &totals, response_rate, conversion_rate).into())
    }
}
