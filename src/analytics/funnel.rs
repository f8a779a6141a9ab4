use crate::analytics::aggregate::CampaignTotals;
use crate::analytics::Goals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub stage: String,
    pub prospects: i64,
    pub conversion_rate: f64,
    pub status: StageStatus,
    pub issue: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelBreakdown {
    pub tofu: FunnelStage,
    pub mofu: FunnelStage,
    pub bofu: FunnelStage,
}

/// Three-stage funnel health check. Top of funnel is judged on lead volume
/// against the goal, the middle on response rate against its target, the
/// bottom on reply-to-appointment conversion against a fixed 15% benchmark.
pub fn analyze(
    goals: &Goals,
    totals: &CampaignTotals,
    response_rate: f64,
    conversion_rate: f64,
) -> FunnelBreakdown {
    let volume_progress = if goals.target_volume > 0 {
        (totals.total_leads as f64 / f64::from(goals.target_volume)) * 100.0
    } else {
        0.0
    };
    let tofu_status = if volume_progress < 25.0 {
        StageStatus::Critical
    } else if volume_progress < 60.0 {
        StageStatus::Warning
    } else {
        StageStatus::Good
    };
    let tofu = FunnelStage {
        stage: "TOFU - Lead Generation".to_string(),
        prospects: totals.total_leads,
        conversion_rate: volume_progress,
        status: tofu_status,
        issue: (tofu_status != StageStatus::Good).then(|| {
            format!(
                "Lead volume at {:.0}% of the {} target",
                volume_progress, goals.target_volume
            )
        }),
    };

    let mofu_status = if response_rate < goals.target_response_rate / 2.0 {
        StageStatus::Critical
    } else if response_rate < goals.target_response_rate {
        StageStatus::Warning
    } else {
        StageStatus::Good
    };
    let mofu = FunnelStage {
        stage: "MOFU - Initial Response".to_string(),
        prospects: totals.total_replies,
        conversion_rate: response_rate,
        status: mofu_status,
        issue: (mofu_status != StageStatus::Good).then(|| {
            format!(
                "Response rate {:.1}% below the {:.1}% target",
                response_rate, goals.target_response_rate
            )
        }),
    };

    let bofu_status = if conversion_rate < 7.5 {
        StageStatus::Critical
    } else if conversion_rate < 15.0 {
        StageStatus::Warning
    } else {
        StageStatus::Good
    };
    let bofu = FunnelStage {
        stage: "BOFU - Appointment Booking".to_string(),
        prospects: totals.total_appointments,
        conversion_rate,
        status: bofu_status,
        issue: (bofu_status != StageStatus::Good).then(|| {
            format!(
                "Conversion {:.1}% below the 15% benchmark",
                conversion_rate
            )
        }),
    };

    FunnelBreakdown { tofu, mofu, bofu }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(leads: i64, replies: i64, appointments: i64) -> CampaignTotals {
        CampaignTotals {
            total_leads: leads,
            total_replies: replies,
            total_appointments: appointments,
            weeks_completed: 4,
        }
    }

    #[test]
    fn healthy_funnel_has_no_issues() {
        let goals = Goals::default();
        // 60k target met, 10% response vs 5% target, 20% conversion
        let f = analyze(&goals, &totals(60_000, 6_000, 1_200), 10.0, 20.0);
        assert_eq!(f.tofu.status, StageStatus::Good);
        assert_eq!(f.mofu.status, StageStatus::Good);
        assert_eq!(f.bofu.status, StageStatus::Good);
        assert!(f.tofu.issue.is_none());
        assert!(f.mofu.issue.is_none());
        assert!(f.bofu.issue.is_none());
    }

    #[test]
    fn low_volume_is_critical_at_top() {
        let goals = Goals::default();
        let f = analyze(&goals, &totals(6_000, 300, 30), 5.0, 10.0);
        // 10% of the 60,000 volume target
        assert_eq!(f.tofu.status, StageStatus::Critical);
        assert!(f.tofu.issue.as_deref().unwrap().contains("10%"));
    }

    #[test]
    fn response_below_half_target_is_critical() {
        let goals = Goals::default();
        let f = analyze(&goals, &totals(40_000, 800, 200), 2.0, 25.0);
        assert_eq!(f.mofu.status, StageStatus::Critical);
        let f = analyze(&goals, &totals(40_000, 1_600, 400), 4.0, 25.0);
        assert_eq!(f.mofu.status, StageStatus::Warning);
    }

    #[test]
    fn conversion_thresholds_split_at_half_benchmark() {
        let goals = Goals::default();
        assert_eq!(
            analyze(&goals, &totals(60_000, 6_000, 100), 10.0, 5.0).bofu.status,
            StageStatus::Critical
        );
        assert_eq!(
            analyze(&goals, &totals(60_000, 6_000, 600), 10.0, 10.0).bofu.status,
            StageStatus::Warning
        );
    }

    #[test]
    fn prospects_track_stage_totals() {
        let goals = Goals::default();
        let f = analyze(&goals, &totals(500, 50, 5), 10.0, 10.0);
        assert_eq!(f.tofu.prospects, 500);
        assert_eq!(f.mofu.prospects, 50);
        assert_eq!(f.bofu.prospects, 5);
    }
}
