use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Project::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Project::Name).string().not_null())
                    .col(
                        ColumnDef::new(Project::ClientName)
                            .string()
                            .not_null()
                            .default("CampaignFlow Pro"),
                    )
                    .col(
                        ColumnDef::new(Project::BrandColor)
                            .string()
                            .not_null()
                            .default("#6366f1"),
                    )
                    .col(
                        ColumnDef::new(Project::LogoUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Project::ProjectType)
                            .string()
                            .not_null()
                            .default("outbound_sales"),
                    )
                    .col(
                        ColumnDef::new(Project::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Project::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaign::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaign::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(Campaign::Name).string().not_null())
                    .col(ColumnDef::new(Campaign::StartDate).date().not_null())
                    .col(ColumnDef::new(Campaign::TargetLeads).integer().not_null())
                    .col(
                        ColumnDef::new(Campaign::AllocatedBudget)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Campaign::TargetOutreach)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Campaign::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Campaign::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_project")
                            .from(Campaign::Table, Campaign::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WeeklyData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyData::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeeklyData::CampaignId).uuid().not_null())
                    .col(ColumnDef::new(WeeklyData::WeekNumber).integer().not_null())
                    .col(
                        ColumnDef::new(WeeklyData::LeadsContacted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WeeklyData::Replies)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WeeklyData::Appointments)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WeeklyData::TargetOutreach)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WeeklyData::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WeeklyData::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_data_campaign")
                            .from(WeeklyData::Table, WeeklyData::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Infrastructure::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Infrastructure::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Infrastructure::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(Infrastructure::Mailboxes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Infrastructure::LinkedinAccounts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Infrastructure::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Infrastructure::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_infrastructure_project")
                            .from(Infrastructure::Table, Infrastructure::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural keys for the upsert paths
        manager
            .create_index(
                Index::create()
                    .name("idx_weekly_data_campaign_week")
                    .table(WeeklyData::Table)
                    .col(WeeklyData::CampaignId)
                    .col(WeeklyData::WeekNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_infrastructure_project")
                    .table(Infrastructure::Table)
                    .col(Infrastructure::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_project")
                    .table(Campaign::Table)
                    .col(Campaign::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyData::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Infrastructure::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Project {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    Name,
    ClientName,
    BrandColor,
    LogoUrl,
    ProjectType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Campaign {
    #[sea_orm(iden = "campaigns")]
    Table,
    Id,
    ProjectId,
    Name,
    StartDate,
    TargetLeads,
    AllocatedBudget,
    TargetOutreach,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WeeklyData {
    Table,
    Id,
    CampaignId,
    WeekNumber,
    LeadsContacted,
    Replies,
    Appointments,
    TargetOutreach,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Infrastructure {
    Table,
    Id,
    ProjectId,
    Mailboxes,
    LinkedinAccounts,
    CreatedAt,
    UpdatedAt,
}
