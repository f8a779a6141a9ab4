use crate::analytics::aggregate::CampaignTotals;
use crate::analytics::WEEKS_PER_YEAR;

/// Fixed reply-to-appointment assumption used by the 30-day forecast.
/// Deliberately not the campaign's observed conversion rate.
pub const REPLY_TO_APPOINTMENT_FACTOR: f64 = 0.45;

/// Where a campaign stands against a yearly target.
///
/// `deficit` is clamped at zero; `adjusted_weekly_target` is not and goes
/// negative once the goal is exceeded. The asymmetry is intentional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub weekly_target: f64,
    pub expected_by_now: f64,
    pub deficit: f64,
    pub remaining_weeks: f64,
    pub adjusted_weekly_target: f64,
    pub progress_pct: f64,
}

pub fn project_goal(yearly_target: f64, weeks_completed: u32, current_total: f64) -> GoalProgress {
    let weekly_target = yearly_target / WEEKS_PER_YEAR;
    let expected_by_now = weekly_target * f64::from(weeks_completed);
    let deficit = (expected_by_now - current_total).max(0.0);
    let remaining_weeks = WEEKS_PER_YEAR - f64::from(weeks_completed);
    let adjusted_weekly_target = if remaining_weeks > 0.0 {
        (yearly_target - current_total) / remaining_weeks
    } else {
        0.0
    };
    let progress_pct = if yearly_target > 0.0 {
        ((current_total / yearly_target) * 100.0).min(100.0)
    } else {
        0.0
    };
    GoalProgress {
        weekly_target,
        expected_by_now,
        deficit,
        remaining_weeks,
        adjusted_weekly_target,
        progress_pct,
    }
}

/// Observed per-week pace of a running campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentPace {
    pub appointments_per_week: f64,
    pub response_rate: f64,
    pub weekly_outreach_volume: f64,
}

pub fn current_pace(totals: &CampaignTotals, response_rate: f64) -> CurrentPace {
    if totals.weeks_completed == 0 {
        return CurrentPace {
            response_rate,
            ..CurrentPace::default()
        };
    }
    let weeks = f64::from(totals.weeks_completed);
    CurrentPace {
        appointments_per_week: totals.total_appointments as f64 / weeks,
        response_rate,
        weekly_outreach_volume: totals.total_leads as f64 / weeks,
    }
}

/// 30-day appointment forecast from budget-derived lead volume and the
/// campaign's observed response rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyProjection {
    pub projected_weekly_leads: f64,
    pub projected_weekly_replies: f64,
    pub monthly_appointments: i64,
    pub confidence: u32,
}

/// `targeted_leads` is the budget allocator's monthly lead volume, spread
/// over four weeks. Confidence starts at 50% and grows with observed weeks.
pub fn project_month(targeted_leads: i64, response_rate: f64, weeks_completed: u32) -> MonthlyProjection {
    let projected_weekly_leads = targeted_leads as f64 / 4.0;
    let projected_weekly_replies = projected_weekly_leads * (response_rate / 100.0);
    let monthly_appointments =
        (projected_weekly_replies * 4.0 * REPLY_TO_APPOINTMENT_FACTOR).round() as i64;
    let confidence = (50 + 10 * weeks_completed).min(95);
    MonthlyProjection {
        projected_weekly_leads,
        projected_weekly_replies,
        monthly_appointments,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deficit_is_never_negative() {
        // ahead of pace: expected 5.19, achieved 40
        let p = project_goal(270.0, 1, 40.0);
        assert_eq!(p.deficit, 0.0);
        // behind pace
        let p = project_goal(270.0, 10, 10.0);
        assert!(p.deficit > 0.0);
        assert!((p.deficit - (270.0 / 52.0 * 10.0 - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn adjusted_target_goes_negative_when_goal_exceeded() {
        let p = project_goal(100.0, 10, 150.0);
        assert!(p.adjusted_weekly_target < 0.0);
        assert_eq!(p.deficit, 0.0);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        assert_eq!(project_goal(100.0, 10, 250.0).progress_pct, 100.0);
        assert_eq!(project_goal(0.0, 10, 50.0).progress_pct, 0.0);
    }

    #[test]
    fn no_remaining_weeks_zeroes_adjusted_target() {
        let p = project_goal(270.0, 52, 100.0);
        assert_eq!(p.remaining_weeks, 0.0);
        assert_eq!(p.adjusted_weekly_target, 0.0);
    }

    #[test]
    fn pace_divides_totals_by_weeks() {
        let totals = CampaignTotals {
            total_leads: 1000,
            total_replies: 50,
            total_appointments: 10,
            weeks_completed: 5,
        };
        let pace = current_pace(&totals, 5.0);
        assert!((pace.appointments_per_week - 2.0).abs() < 1e-9);
        assert!((pace.weekly_outreach_volume - 200.0).abs() < 1e-9);
    }

    #[test]
    fn pace_with_no_weeks_is_zero() {
        let pace = current_pace(&CampaignTotals::default(), 3.0);
        assert_eq!(pace.appointments_per_week, 0.0);
        assert_eq!(pace.weekly_outreach_volume, 0.0);
        assert_eq!(pace.response_rate, 3.0);
    }

    #[test]
    fn monthly_forecast_uses_fixed_conversion_factor() {
        // 175,000 leads/month at a 2% response rate
        let p = project_month(175_000, 2.0, 3);
        assert!((p.projected_weekly_leads - 43_750.0).abs() < 1e-9);
        assert!((p.projected_weekly_replies - 875.0).abs() < 1e-9);
        assert_eq!(p.monthly_appointments, 1575);
        assert_eq!(p.confidence, 80);
    }

    #[test]
    fn confidence_caps_at_ninety_five() {
        assert_eq!(project_month(0, 0.0, 0).confidence, 50);
        assert_eq!(project_month(0, 0.0, 10).confidence, 95);
    }
}
