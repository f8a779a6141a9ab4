use async_graphql::*;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::analytics;
use crate::analytics::funnel::StageStatus;
use crate::analytics::recommend::Priority;

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client_name: String,
    pub brand_color: String,
    pub logo_url: String,
    pub project_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entities::project::Model> for Project {
    fn from(project: crate::entities::project::Model) -> Self {
        Self {
            id: project.id,
            name: project.name,
            client_name: project.client_name,
            brand_color: project.brand_color,
            logo_url: project.logo_url,
            project_type: project.project_type,
            created_at: project.created_at.into(),
            updated_at: project.updated_at.into(),
        }
    }
}

#[ComplexObject]
impl Project {
    async fn campaigns(&self, ctx: &Context<'_>) -> Result<Vec<Campaign>> {
        let campaign_service = ctx.data::<crate::services::CampaignService>()?;
        let campaigns = campaign_service
            .get_project_campaigns(self.id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch campaigns: {}", e)))?;
        Ok(campaigns.into_iter().map(|c| c.into()).collect())
    }

    async fn infrastructure(&self, ctx: &Context<'_>) -> Result<Option<Infrastructure>> {
        let infra_service = ctx.data::<crate::services::InfrastructureService>()?;
        let infra = infra_service
            .get_project_infrastructure(self.id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch infrastructure: {}", e)))?;
        Ok(infra.map(|i| i.into()))
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Campaign {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub target_leads: i32,
    pub allocated_budget: Decimal,
    pub target_outreach: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entities::campaign::Model> for Campaign {
    fn from(campaign: crate::entities::campaign::Model) -> Self {
        Self {
            id: campaign.id,
            project_id: campaign.project_id,
            name: campaign.name,
            start_date: campaign.start_date,
            target_leads: campaign.target_leads,
            allocated_budget: campaign.allocated_budget,
            target_outreach: campaign.target_outreach,
            created_at: campaign.created_at.into(),
            updated_at: campaign.updated_at.into(),
        }
    }
}

#[ComplexObject]
impl Campaign {
    async fn weekly_entries(&self, ctx: &Context<'_>) -> Result<Vec<WeeklyEntry>> {
        let weekly_service = ctx.data::<crate::services::WeeklyEntryService>()?;
        let entries = weekly_service
            .get_campaign_entries(self.id)
            .await
            .map_err(|e| Error::new(format!("Failed to fetch weekly entries: {}", e)))?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    async fn project(&self, ctx: &Context<'_>) -> Result<Option<Project>> {
        let project_service = ctx.data::<crate::services::ProjectService>()?;
        let project = crate::entities::project::Entity::find_by_id(self.project_id)
            .one(project_service.get_db())
            .await
            .map_err(|e| Error::new(format!("Failed to fetch project: {}", e)))?;
        Ok(project.map(|p| p.into()))
    }
}

#[derive(SimpleObject)]
pub struct WeeklyEntry {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub week_number: i32,
    pub leads_contacted: i32,
    pub replies: i32,
    pub appointments: i32,
    pub target_outreach: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entities::weekly_entry::Model> for WeeklyEntry {
    fn from(entry: crate::entities::weekly_entry::Model) -> Self {
        Self {
            id: entry.id,
            campaign_id: entry.campaign_id,
            week_number: entry.week_number,
            leads_contacted: entry.leads_contacted,
            replies: entry.replies,
            appointments: entry.appointments,
            target_outreach: entry.target_outreach,
            created_at: entry.created_at.into(),
            updated_at: entry.updated_at.into(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Infrastructure {
    pub id: Uuid,
    pub project_id: Uuid,
    pub mailboxes: i32,
    pub linkedin_accounts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entities::infrastructure::Model> for Infrastructure {
    fn from(infra: crate::entities::infrastructure::Model) -> Self {
        Self {
            id: infra.id,
            project_id: infra.project_id,
            mailboxes: infra.mailboxes,
            linkedin_accounts: infra.linkedin_accounts,
            created_at: infra.created_at.into(),
            updated_at: infra.updated_at.into(),
        }
    }
}

/// Period goals for the projection and recommendation queries. Defaults
/// mirror the dashboard's standard yearly plan.
#[derive(InputObject)]
pub struct GoalsInput {
    #[graphql(default = 270)]
    pub target_appointments: i32,
    #[graphql(default = 5.0)]
    pub target_response_rate: f64,
    #[graphql(default = 60_000)]
    pub target_volume: i32,
    #[graphql(default = 5_200.0)]
    pub allocated_budget: f64,
}

impl From<GoalsInput> for analytics::Goals {
    fn from(input: GoalsInput) -> Self {
        Self {
            target_appointments: input.target_appointments,
            target_response_rate: input.target_response_rate,
            target_volume: input.target_volume,
            allocated_budget: input.allocated_budget,
        }
    }
}

#[derive(SimpleObject)]
pub struct WeeklyPerformance {
    pub week_number: i32,
    pub leads_contacted: i32,
    pub replies: i32,
    pub appointments: i32,
    pub target_outreach: i32,
    pub daily_average: f64,
}

#[derive(SimpleObject)]
pub struct CumulativeTrendPoint {
    pub week_number: i32,
    pub leads: i64,
    pub replies: i64,
    pub appointments: i64,
    pub target: f64,
}

impl From<analytics::aggregate::CumulativePoint> for CumulativeTrendPoint {
    fn from(p: analytics::aggregate::CumulativePoint) -> Self {
        Self {
            week_number: p.week_number,
            leads: p.leads,
            replies: p.replies,
            appointments: p.appointments,
            target: p.target,
        }
    }
}

#[derive(SimpleObject)]
pub struct CampaignPerformance {
    pub campaign_id: Uuid,
    pub total_leads: i64,
    pub total_replies: i64,
    pub total_appointments: i64,
    pub weeks_completed: u32,
    pub response_rate: f64,
    pub conversion_rate: f64,
    pub weekly: Vec<WeeklyPerformance>,
    pub cumulative: Vec<CumulativeTrendPoint>,
}

#[derive(SimpleObject)]
pub struct BudgetBreakdown {
    pub allocated_budget: f64,
    pub budget_for_leads: f64,
    pub budget_for_mailboxes: f64,
    pub targeted_leads: i64,
    pub mailboxes: i64,
}

impl From<analytics::budget::BudgetBreakdown> for BudgetBreakdown {
    fn from(b: analytics::budget::BudgetBreakdown) -> Self {
        Self {
            allocated_budget: b.allocated_budget,
            budget_for_leads: b.budget_for_leads,
            budget_for_mailboxes: b.budget_for_mailboxes,
            targeted_leads: b.targeted_leads,
            mailboxes: b.mailboxes,
        }
    }
}

#[derive(SimpleObject)]
pub struct GoalProgress {
    pub weekly_target: f64,
    pub expected_by_now: f64,
    pub deficit: f64,
    pub remaining_weeks: f64,
    pub adjusted_weekly_target: f64,
    pub progress_pct: f64,
}

impl From<analytics::projection::GoalProgress> for GoalProgress {
    fn from(p: analytics::projection::GoalProgress) -> Self {
        Self {
            weekly_target: p.weekly_target,
            expected_by_now: p.expected_by_now,
            deficit: p.deficit,
            remaining_weeks: p.remaining_weeks,
            adjusted_weekly_target: p.adjusted_weekly_target,
            progress_pct: p.progress_pct,
        }
    }
}

#[derive(SimpleObject)]
pub struct CurrentPace {
    pub appointments_per_week: f64,
    pub response_rate: f64,
    pub weekly_outreach_volume: f64,
}

impl From<analytics::projection::CurrentPace> for CurrentPace {
    fn from(p: analytics::projection::CurrentPace) -> Self {
        Self {
            appointments_per_week: p.appointments_per_week,
            response_rate: p.response_rate,
            weekly_outreach_volume: p.weekly_outreach_volume,
        }
    }
}

#[derive(SimpleObject)]
pub struct MonthlyProjection {
    pub projected_weekly_leads: f64,
    pub projected_weekly_replies: f64,
    pub monthly_appointments: i64,
    pub confidence: u32,
}

impl From<analytics::projection::MonthlyProjection> for MonthlyProjection {
    fn from(p: analytics::projection::MonthlyProjection) -> Self {
        Self {
            projected_weekly_leads: p.projected_weekly_leads,
            projected_weekly_replies: p.projected_weekly_replies,
            monthly_appointments: p.monthly_appointments,
            confidence: p.confidence,
        }
    }
}

/// Goal standing, observed pace, and the 30-day forecast in one payload.
#[derive(SimpleObject)]
pub struct CampaignProjection {
    pub goal: GoalProgress,
    pub pace: CurrentPace,
    pub monthly: MonthlyProjection,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(name = "RecommendationPriority")]
pub enum RecommendationPriority {
    #[graphql(name = "HIGH")]
    High,
    #[graphql(name = "MEDIUM")]
    Medium,
    #[graphql(name = "LOW")]
    Low,
}

impl From<Priority> for RecommendationPriority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::High => RecommendationPriority::High,
            Priority::Medium => RecommendationPriority::Medium,
            Priority::Low => RecommendationPriority::Low,
        }
    }
}

#[derive(SimpleObject)]
pub struct Recommendation {
    pub id: i32,
    pub priority: RecommendationPriority,
    pub category: String,
    pub action: String,
    pub expected_impact: String,
}

impl From<analytics::recommend::Recommendation> for Recommendation {
    fn from(r: analytics::recommend::Recommendation) -> Self {
        Self {
            id: r.id,
            priority: r.priority.into(),
            category: r.category,
            action: r.action,
            expected_impact: r.expected_impact,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
#[graphql(name = "FunnelStageStatus")]
pub enum FunnelStageStatus {
    #[graphql(name = "GOOD")]
    Good,
    #[graphql(name = "WARNING")]
    Warning,
    #[graphql(name = "CRITICAL")]
    Critical,
}

impl From<StageStatus> for FunnelStageStatus {
    fn from(s: StageStatus) -> Self {
        match s {
            StageStatus::Good => FunnelStageStatus::Good,
            StageStatus::Warning => FunnelStageStatus::Warning,
            StageStatus::Critical => FunnelStageStatus::Critical,
        }
    }
}

#[derive(SimpleObject)]
pub struct FunnelStage {
    pub stage: String,
    pub prospects: i64,
    pub conversion_rate: f64,
    pub status: FunnelStageStatus,
    pub issue: Option<String>,
}

impl From<analytics::funnel::FunnelStage> for FunnelStage {
    fn from(s: analytics::funnel::FunnelStage) -> Self {
        Self {
            stage: s.stage,
            prospects: s.prospects,
            conversion_rate: s.conversion_rate,
            status: s.status.into(),
            issue: s.issue,
        }
    }
}

#[derive(SimpleObject)]
pub struct FunnelBreakdown {
    pub tofu: FunnelStage,
    pub mofu: FunnelStage,
    pub bofu: FunnelStage,
}

impl From<analytics::funnel::FunnelBreakdown> for FunnelBreakdown {
    fn from(f: analytics::funnel::FunnelBreakdown) -> Self {
        Self {
            tofu: f.tofu.into(),
            mofu: f.mofu.into(),
            bofu: f.bofu.into(),
        }
    }
}

#[derive(InputObject)]
pub struct CreateProjectInput {
    pub name: String,
    pub client_name: Option<String>,
    pub brand_color: Option<String>,
    pub logo_url: Option<String>,
    pub project_type: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub brand_color: Option<String>,
    pub logo_url: Option<String>,
    pub project_type: Option<String>,
}

#[derive(InputObject)]
pub struct CreateCampaignInput {
    pub project_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub target_leads: i32,
    pub allocated_budget: Decimal,
    pub target_outreach: Option<i32>,
}

#[derive(InputObject)]
pub struct UpdateCampaignInput {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub target_leads: Option<i32>,
    pub allocated_budget: Option<Decimal>,
    pub target_outreach: Option<i32>,
}

/// Full-row upsert keyed on (campaign_id, week_number). Omitted counters
/// default to zero, matching the dashboard's blank-field behavior.
#[derive(InputObject)]
pub struct UpsertWeeklyEntryInput {
    pub campaign_id: Uuid,
    pub week_number: i32,
    #[graphql(default)]
    pub leads_contacted: i32,
    #[graphql(default)]
    pub replies: i32,
    #[graphql(default)]
    pub appointments: i32,
    #[graphql(default)]
    pub target_outreach: i32,
}

#[derive(InputObject)]
pub struct UpsertInfrastructureInput {
    pub project_id: Uuid,
    #[graphql(default)]
    pub mailboxes: i32,
    #[graphql(default)]
    pub linkedin_accounts: i32,
}

#[derive(SimpleObject)]
pub struct MessageResponse {
    pub message: String,
}
