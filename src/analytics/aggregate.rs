use crate::analytics::WEEKS_PER_YEAR;
use crate::entities::weekly_entry;

/// Running totals folded from a campaign's weekly entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignTotals {
    pub total_leads: i64,
    pub total_replies: i64,
    pub total_appointments: i64,
    pub weeks_completed: u32,
}

/// Fold weekly entries into totals. Empty input yields all zeros.
/// A week counts as completed once a row exists for it, regardless of values.
pub fn aggregate(entries: &[weekly_entry::Model]) -> CampaignTotals {
    entries.iter().fold(CampaignTotals::default(), |acc, e| {
        CampaignTotals {
            total_leads: acc.total_leads + i64::from(e.leads_contacted),
            total_replies: acc.total_replies + i64::from(e.replies),
            total_appointments: acc.total_appointments + i64::from(e.appointments),
            weeks_completed: acc.weeks_completed + 1,
        }
    })
}

/// Per-week daily average over a 5 business-day week.
pub fn daily_average(leads_contacted: i32) -> f64 {
    f64::from(leads_contacted) / 5.0
}

/// One point of the cumulative trend series. `target` is the straight-line
/// pace toward the appointment goal at this position in the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativePoint {
    pub week_number: i32,
    pub leads: i64,
    pub replies: i64,
    pub appointments: i64,
    pub target: f64,
}

/// Cumulative sums over entries in week order. The target overlay uses the
/// 1-based position in the series, not the stored week number, so a campaign
/// starting mid-year still charts against a pace that begins at week one.
pub fn cumulative_series(
    entries: &[weekly_entry::Model],
    goal_appointments: f64,
) -> Vec<CumulativePoint> {
    let mut sorted: Vec<&weekly_entry::Model> = entries.iter().collect();
    sorted.sort_by_key(|e| e.week_number);

    let mut leads = 0i64;
    let mut replies = 0i64;
    let mut appointments = 0i64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, e)| {
            leads += i64::from(e.leads_contacted);
            replies += i64::from(e.replies);
            appointments += i64::from(e.appointments);
            let position = (i + 1) as f64;
            let target = if goal_appointments > 0.0 {
                (goal_appointments / WEEKS_PER_YEAR) * position
            } else {
                0.0
            };
            CumulativePoint {
                week_number: e.week_number,
                leads,
                replies,
                appointments,
                target,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(week: i32, leads: i32, replies: i32, appointments: i32) -> weekly_entry::Model {
        weekly_entry::Model {
            id: Uuid::new_v4(),
            campaign_id: Uuid::nil(),
            week_number: week,
            leads_contacted: leads,
            replies,
            appointments,
            target_outreach: 0,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn empty_input_yields_zero_totals() {
        let totals = aggregate(&[]);
        assert_eq!(totals, CampaignTotals::default());
    }

    #[test]
    fn totals_equal_sums_of_counters() {
        let entries = vec![entry(1, 100, 5, 2), entry(2, 250, 12, 4), entry(3, 0, 0, 0)];
        let totals = aggregate(&entries);
        assert_eq!(totals.total_leads, 350);
        assert_eq!(totals.total_replies, 17);
        assert_eq!(totals.total_appointments, 6);
        assert_eq!(totals.weeks_completed, 3);
    }

    #[test]
    fn daily_average_splits_across_business_days() {
        assert!((daily_average(100) - 20.0).abs() < 1e-9);
        assert!((daily_average(0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn cumulative_series_sorts_and_accumulates() {
        let entries = vec![entry(3, 30, 3, 1), entry(1, 10, 1, 0), entry(2, 20, 2, 1)];
        let series = cumulative_series(&entries, 270.0);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].week_number, 1);
        assert_eq!(series[2].week_number, 3);
        assert_eq!(series[2].leads, 60);
        assert_eq!(series[2].replies, 6);
        assert_eq!(series[2].appointments, 2);
        // pace line at position 2 of the series
        assert!((series[1].target - (270.0 / 52.0) * 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_goal_flattens_target_line() {
        let series = cumulative_series(&[entry(1, 10, 0, 0)], 0.0);
        assert!((series[0].target - 0.0).abs() < 1e-9);
    }
}
