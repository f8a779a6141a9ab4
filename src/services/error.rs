use sea_orm::DbErr;

/// Errors surfaced by the services layer. Validation errors are produced
/// before any query runs; database errors carrying a named constraint
/// violation are translated to the same fixed messages on the way out.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Database(String),
}

/// Known constraint identifiers and the user-facing message each maps to.
/// These names are declared by the schema migrations; anything else falls
/// through with the raw message.
const CONSTRAINT_MESSAGES: &[(&str, &str)] = &[
    ("projects_name_not_empty", "Project name cannot be empty"),
    (
        "projects_name_max_length",
        "Project name must be less than 100 characters",
    ),
    ("campaigns_name_not_empty", "Campaign name cannot be empty"),
    (
        "campaigns_name_max_length",
        "Campaign name must be less than 200 characters",
    ),
    (
        "campaigns_target_leads_positive",
        "Target leads must be a positive number (1-1,000,000)",
    ),
    (
        "campaigns_budget_positive",
        "Budget must be a positive amount (1-100,000,000)",
    ),
    (
        "campaigns_date_realistic",
        "Start date must be between 2020 and 2050",
    ),
    (
        "weekly_week_number_valid",
        "Week number must be between 1 and 52",
    ),
    (
        "weekly_leads_nonnegative",
        "Leads contacted must be a non-negative number (0-100,000)",
    ),
    (
        "infra_mailboxes_valid",
        "Mailboxes must be a non-negative number (0-1,000)",
    ),
    (
        "infra_linkedin_valid",
        "LinkedIn accounts must be a non-negative number (0-1,000)",
    ),
];

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        let raw = err.to_string();
        for (needle, message) in CONSTRAINT_MESSAGES {
            if raw.contains(needle) {
                return ServiceError::Validation((*message).to_string());
            }
        }
        ServiceError::Database(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraint_maps_to_fixed_message() {
        let err = DbErr::Custom(
            "error returned from database: new row for relation \"campaigns\" violates check constraint \"campaigns_budget_positive\"".to_string(),
        );
        match ServiceError::from(err) {
            ServiceError::Validation(msg) => {
                assert_eq!(msg, "Budget must be a positive amount (1-100,000,000)")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn week_constraint_maps_to_week_message() {
        let err = DbErr::Custom("violates check constraint \"weekly_week_number_valid\"".to_string());
        match ServiceError::from(err) {
            ServiceError::Validation(msg) => {
                assert_eq!(msg, "Week number must be between 1 and 52")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_error_keeps_raw_message() {
        let err = DbErr::Custom("connection reset by peer".to_string());
        match ServiceError::from(err) {
            ServiceError::Database(msg) => assert!(msg.contains("connection reset")),
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
