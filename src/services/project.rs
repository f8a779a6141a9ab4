use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::{prelude::*, project};
use crate::services::validation::{
    validate_brand_color, validate_client_name, validate_logo_url, validate_project_name,
};
use crate::services::ServiceError;

pub const DEFAULT_CLIENT_NAME: &str = "CampaignFlow Pro";
pub const DEFAULT_BRAND_COLOR: &str = "#6366f1";

#[derive(Clone)]
pub struct ProjectService {
    db: DatabaseConnection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    OutboundSales,
    InboundMarketing,
    Events,
    PaidAds,
    SocialMedia,
    ContentMarketing,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::OutboundSales => "outbound_sales",
            ProjectType::InboundMarketing => "inbound_marketing",
            ProjectType::Events => "events",
            ProjectType::PaidAds => "paid_ads",
            ProjectType::SocialMedia => "social_media",
            ProjectType::ContentMarketing => "content_marketing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "outbound_sales" => Some(ProjectType::OutboundSales),
            "inbound_marketing" => Some(ProjectType::InboundMarketing),
            "events" => Some(ProjectType::Events),
            "paid_ads" => Some(ProjectType::PaidAds),
            "social_media" => Some(ProjectType::SocialMedia),
            "content_marketing" => Some(ProjectType::ContentMarketing),
            _ => None,
        }
    }
}

impl ProjectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create a new project
    pub async fn create_project(
        &self,
        name: &str,
        client_name: Option<String>,
        brand_color: Option<String>,
        logo_url: Option<String>,
        project_type: Option<ProjectType>,
    ) -> Result<project::Model, ServiceError> {
        validate_project_name(name)?;

        let client_name = client_name.unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string());
        validate_client_name(&client_name)?;

        let brand_color = brand_color.unwrap_or_else(|| DEFAULT_BRAND_COLOR.to_string());
        validate_brand_color(&brand_color)?;

        let logo_url = logo_url.unwrap_or_default();
        validate_logo_url(&logo_url)?;

        let new_project = project::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.trim().to_string()),
            client_name: Set(client_name),
            brand_color: Set(brand_color),
            logo_url: Set(logo_url),
            project_type: Set(project_type
                .unwrap_or(ProjectType::OutboundSales)
                .as_str()
                .to_string()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        let project = new_project.insert(&self.db).await?;
        Ok(project)
    }

    pub async fn get_project(
        &self,
        project_id: Uuid,
    ) -> Result<Option<project::Model>, ServiceError> {
        let project = Project::find_by_id(project_id).one(&self.db).await?;
        Ok(project)
    }

    /// All projects, newest first.
    pub async fn get_projects(&self) -> Result<Vec<project::Model>, ServiceError> {
        let projects = Project::find()
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(projects)
    }

    /// Update project fields; each supplied field is validated before the write.
    pub async fn update_project(
        &self,
        project_id: Uuid,
        name: Option<String>,
        client_name: Option<String>,
        brand_color: Option<String>,
        logo_url: Option<String>,
        project_type: Option<ProjectType>,
    ) -> Result<project::Model, ServiceError> {
        let project = Project::find_by_id(project_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Project"))?;

        let mut project_active: project::ActiveModel = project.into();

        if let Some(name) = name {
            validate_project_name(&name)?;
            project_active.name = Set(name.trim().to_string());
        }

        if let Some(client_name) = client_name {
            validate_client_name(&client_name)?;
            project_active.client_name = Set(client_name);
        }

        if let Some(brand_color) = brand_color {
            validate_brand_color(&brand_color)?;
            project_active.brand_color = Set(brand_color);
        }

        if let Some(logo_url) = logo_url {
            validate_logo_url(&logo_url)?;
            project_active.logo_url = Set(logo_url);
        }

        if let Some(project_type) = project_type {
            project_active.project_type = Set(project_type.as_str().to_string());
        }

        project_active.updated_at = Set(Utc::now().into());

        let updated_project = project_active.update(&self.db).await?;
        Ok(updated_project)
    }

    /// Delete a project. Campaigns, weekly entries, and the infrastructure
    /// record go with it via the cascade rules.
    pub async fn delete_project(&self, project_id: Uuid) -> Result<(), ServiceError> {
        let project = Project::find_by_id(project_id)
            .one(&self.db)
            .await?
            .ok_or(ServiceError::NotFound("Project"))?;

        Project::delete_by_id(project.id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_round_trips() {
        for ty in [
            ProjectType::OutboundSales,
            ProjectType::InboundMarketing,
            ProjectType::Events,
            ProjectType::PaidAds,
            ProjectType::SocialMedia,
            ProjectType::ContentMarketing,
        ] {
            assert_eq!(ProjectType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(ProjectType::from_str("seo"), None);
    }
}
