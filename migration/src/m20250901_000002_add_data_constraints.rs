use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Named CHECK constraints. The constraint names are part of the API surface:
/// the services map raw violation messages back to user-facing text by
/// matching these identifiers.
const CHECKS: &[(&str, &str, &str)] = &[
    (
        "projects",
        "projects_name_not_empty",
        "char_length(trim(name)) > 0",
    ),
    (
        "projects",
        "projects_name_max_length",
        "char_length(name) <= 100",
    ),
    (
        "campaigns",
        "campaigns_name_not_empty",
        "char_length(trim(name)) > 0",
    ),
    (
        "campaigns",
        "campaigns_name_max_length",
        "char_length(name) <= 200",
    ),
    (
        "campaigns",
        "campaigns_target_leads_positive",
        "target_leads > 0 AND target_leads <= 1000000",
    ),
    (
        "campaigns",
        "campaigns_budget_positive",
        "allocated_budget > 0 AND allocated_budget <= 100000000",
    ),
    (
        "campaigns",
        "campaigns_date_realistic",
        "start_date >= '2020-01-01' AND start_date <= '2050-12-31'",
    ),
    (
        "weekly_data",
        "weekly_week_number_valid",
        "week_number >= 1 AND week_number <= 52",
    ),
    (
        "weekly_data",
        "weekly_leads_nonnegative",
        "leads_contacted >= 0 AND leads_contacted <= 100000 \
         AND replies >= 0 AND replies <= 100000 \
         AND appointments >= 0 AND appointments <= 100000 \
         AND target_outreach >= 0 AND target_outreach <= 100000",
    ),
    (
        "infrastructure",
        "infra_mailboxes_valid",
        "mailboxes >= 0 AND mailboxes <= 1000",
    ),
    (
        "infrastructure",
        "infra_linkedin_valid",
        "linkedin_accounts >= 0 AND linkedin_accounts <= 1000",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for (table, name, expr) in CHECKS {
            conn.execute_unprepared(&format!(
                "ALTER TABLE {table} ADD CONSTRAINT {name} CHECK ({expr})"
            ))
            .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for (table, name, _) in CHECKS {
            conn.execute_unprepared(&format!(
                "ALTER TABLE {table} DROP CONSTRAINT IF EXISTS {name}"
            ))
            .await?;
        }
        Ok(())
    }
}
