use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::services::ServiceError;

pub const PROJECT_NAME_MAX: usize = 100;
pub const CLIENT_NAME_MAX: usize = 100;
pub const CAMPAIGN_NAME_MAX: usize = 200;
pub const TARGET_LEADS_MAX: i32 = 1_000_000;
pub const CAMPAIGN_OUTREACH_MAX: i32 = 1_000_000;
pub const WEEKLY_COUNT_MAX: i32 = 100_000;
pub const INFRA_COUNT_MAX: i32 = 1_000;
pub const START_YEAR_MIN: i32 = 2020;
pub const START_YEAR_MAX: i32 = 2050;

/// Boundary validation, run before any store call. The same rules are
/// re-enforced by named CHECK constraints in the schema.
pub fn validate_project_name(name: &str) -> Result<(), ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation("Project name cannot be empty"));
    }
    if trimmed.chars().count() > PROJECT_NAME_MAX {
        return Err(ServiceError::validation(
            "Project name must be less than 100 characters",
        ));
    }
    Ok(())
}

pub fn validate_client_name(client_name: &str) -> Result<(), ServiceError> {
    if client_name.trim().chars().count() > CLIENT_NAME_MAX {
        return Err(ServiceError::validation(
            "Client name must be less than 100 characters",
        ));
    }
    Ok(())
}

pub fn validate_brand_color(color: &str) -> Result<(), ServiceError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ServiceError::validation("Invalid hex color format"));
    }
    Ok(())
}

/// Logo references are either empty or an http(s) URL.
pub fn validate_logo_url(url: &str) -> Result<(), ServiceError> {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ServiceError::validation("Invalid URL format"))
    }
}

pub fn validate_campaign_name(name: &str) -> Result<(), ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation("Campaign name cannot be empty"));
    }
    if trimmed.chars().count() > CAMPAIGN_NAME_MAX {
        return Err(ServiceError::validation(
            "Campaign name must be less than 200 characters",
        ));
    }
    Ok(())
}

pub fn validate_start_date(start_date: NaiveDate) -> Result<(), ServiceError> {
    let year = start_date.year();
    if !(START_YEAR_MIN..=START_YEAR_MAX).contains(&year) {
        return Err(ServiceError::validation(
            "Start date must be between 2020 and 2050",
        ));
    }
    Ok(())
}

pub fn validate_target_leads(target_leads: i32) -> Result<(), ServiceError> {
    if target_leads <= 0 || target_leads > TARGET_LEADS_MAX {
        return Err(ServiceError::validation(
            "Target leads must be a positive number (1-1,000,000)",
        ));
    }
    Ok(())
}

pub fn validate_allocated_budget(budget: Decimal) -> Result<(), ServiceError> {
    if budget <= Decimal::ZERO || budget > Decimal::from(100_000_000) {
        return Err(ServiceError::validation(
            "Budget must be a positive amount (1-100,000,000)",
        ));
    }
    Ok(())
}

pub fn validate_campaign_outreach(target_outreach: i32) -> Result<(), ServiceError> {
    if !(0..=CAMPAIGN_OUTREACH_MAX).contains(&target_outreach) {
        return Err(ServiceError::validation(
            "Target outreach must be a non-negative number (0-1,000,000)",
        ));
    }
    Ok(())
}

pub fn validate_week_number(week_number: i32) -> Result<(), ServiceError> {
    if !(1..=52).contains(&week_number) {
        return Err(ServiceError::validation(
            "Week number must be between 1 and 52",
        ));
    }
    Ok(())
}

pub fn validate_weekly_count(value: i32, label: &str) -> Result<(), ServiceError> {
    if !(0..=WEEKLY_COUNT_MAX).contains(&value) {
        return Err(ServiceError::validation(format!(
            "{label} must be a non-negative number (0-100,000)"
        )));
    }
    Ok(())
}

pub fn validate_mailboxes(mailboxes: i32) -> Result<(), ServiceError> {
    if !(0..=INFRA_COUNT_MAX).contains(&mailboxes) {
        return Err(ServiceError::validation(
            "Mailboxes must be a non-negative number (0-1,000)",
        ));
    }
    Ok(())
}

pub fn validate_linkedin_accounts(accounts: i32) -> Result<(), ServiceError> {
    if !(0..=INFRA_COUNT_MAX).contains(&accounts) {
        return Err(ServiceError::validation(
            "LinkedIn accounts must be a non-negative number (0-1,000)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_53_is_rejected_before_the_store() {
        assert!(validate_week_number(53).is_err());
        assert!(validate_week_number(0).is_err());
        assert!(validate_week_number(1).is_ok());
        assert!(validate_week_number(52).is_ok());
    }

    #[test]
    fn empty_and_oversized_names_fail() {
        assert!(validate_campaign_name("").is_err());
        assert!(validate_campaign_name("   ").is_err());
        assert!(validate_campaign_name(&"x".repeat(201)).is_err());
        assert!(validate_campaign_name("Q3 Outbound").is_ok());
        assert!(validate_project_name(&"x".repeat(101)).is_err());
        assert!(validate_project_name("Acme").is_ok());
    }

    #[test]
    fn budget_bounds() {
        assert!(validate_allocated_budget(Decimal::ZERO).is_err());
        assert!(validate_allocated_budget(Decimal::from(-5)).is_err());
        assert!(validate_allocated_budget(Decimal::from(100_000_001)).is_err());
        assert!(validate_allocated_budget(Decimal::from(5_000)).is_ok());
    }

    #[test]
    fn start_date_year_bounds() {
        let too_early = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        let too_late = NaiveDate::from_ymd_opt(2051, 1, 1).unwrap();
        let ok = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(validate_start_date(too_early).is_err());
        assert!(validate_start_date(too_late).is_err());
        assert!(validate_start_date(ok).is_ok());
    }

    #[test]
    fn brand_color_requires_six_hex_digits() {
        assert!(validate_brand_color("#4F46E5").is_ok());
        assert!(validate_brand_color("4F46E5").is_err());
        assert!(validate_brand_color("#4F46E").is_err());
        assert!(validate_brand_color("#4F46EG").is_err());
    }

    #[test]
    fn weekly_counts_and_infra_bounds() {
        assert!(validate_weekly_count(-1, "Leads contacted").is_err());
        assert!(validate_weekly_count(100_001, "Leads contacted").is_err());
        assert!(validate_weekly_count(0, "Leads contacted").is_ok());
        assert!(validate_mailboxes(1_001).is_err());
        assert!(validate_mailboxes(0).is_ok());
        assert!(validate_linkedin_accounts(-1).is_err());
    }
}
