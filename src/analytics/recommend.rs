use crate::analytics::aggregate::CampaignTotals;
use crate::analytics::Goals;

/// One mailbox is assumed to carry 500 leads of monthly outreach.
const LEADS_PER_MAILBOX: f64 = 500.0;
/// Reply-to-appointment conversion below this is flagged.
const CONVERSION_BENCHMARK: f64 = 15.0;

// Divide-by-zero fallbacks for campaigns with no observed rates yet.
const FALLBACK_CONVERSION_FRACTION: f64 = 0.1;
const FALLBACK_RESPONSE_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A derived recommendation record. Regenerated on every pass, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: i32,
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub expected_impact: String,
}

/// Single-pass ordered rule evaluation. Rules fire independently and in a
/// fixed order; when none fires, exactly one low-priority record is emitted.
pub fn recommendations(
    goals: &Goals,
    totals: &CampaignTotals,
    response_rate: f64,
    conversion_rate: f64,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let mut next_id = 1;
    let mut push = |recs: &mut Vec<Recommendation>,
                    priority: Priority,
                    category: &str,
                    action: String,
                    expected_impact: String| {
        recs.push(Recommendation {
            id: next_id,
            priority,
            category: category.to_string(),
            action,
            expected_impact,
        });
        next_id += 1;
    };

    let appointment_gap = i64::from(goals.target_appointments) - totals.total_appointments;
    if appointment_gap > 0 {
        let conversion_fraction = if conversion_rate > 0.0 {
            conversion_rate / 100.0
        } else {
            FALLBACK_CONVERSION_FRACTION
        };
        let response_fraction = if response_rate > 0.0 {
            response_rate / 100.0
        } else {
            FALLBACK_RESPONSE_FRACTION
        };
        let needed_replies =
            (f64::from(goals.target_appointments) / conversion_fraction).ceil();
        let needed_leads = (needed_replies / response_fraction).ceil() as i64;
        let additional_leads = (needed_leads - totals.total_leads).max(0);

        if additional_leads > 0 {
            push(
                &mut recs,
                Priority::High,
                "Lead Volume",
                format!(
                    "Increase outreach volume by {} leads to close the appointment gap",
                    additional_leads
                ),
                format!("{} more appointments needed", appointment_gap),
            );

            let additional_mailboxes =
                (additional_leads as f64 / LEADS_PER_MAILBOX).ceil() as i64;
            if additional_mailboxes > 0 {
                push(
                    &mut recs,
                    Priority::High,
                    "Infrastructure",
                    format!(
                        "Provision {} additional mailboxes for the added volume",
                        additional_mailboxes
                    ),
                    format!("Sending capacity for {} more leads", additional_leads),
                );
            }

            push(
                &mut recs,
                Priority::High,
                "Lead Sourcing",
                format!("Source {} additional enriched leads", additional_leads),
                format!("Keeps pipeline ahead of the {} leads required", needed_leads),
            );
        }
    }

    if response_rate < goals.target_response_rate {
        push(
            &mut recs,
            Priority::Medium,
            "Messaging",
            "Revise outreach messaging and subject lines".to_string(),
            format!(
                "Lift response rate from {:.1}% toward the {:.1}% target",
                response_rate, goals.target_response_rate
            ),
        );
        push(
            &mut recs,
            Priority::Medium,
            "Follow-up",
            "Add a structured follow-up sequence for non-responders".to_string(),
            format!(
                "Recovers replies missed at the current {:.1}% response rate",
                response_rate
            ),
        );
    }

    if conversion_rate < CONVERSION_BENCHMARK {
        push(
            &mut recs,
            Priority::Medium,
            "Conversion",
            "Tighten appointment qualification and booking flow".to_string(),
            format!(
                "Conversion at {:.1}% against the {:.0}% benchmark",
                conversion_rate, CONVERSION_BENCHMARK
            ),
        );
    }

    if recs.is_empty() {
        push(
            &mut recs,
            Priority::Low,
            "Performance",
            "Maintain current outreach momentum".to_string(),
            "All goal and rate thresholds currently met".to_string(),
        );
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(leads: i64, replies: i64, appointments: i64, weeks: u32) -> CampaignTotals {
        CampaignTotals {
            total_leads: leads,
            total_replies: replies,
            total_appointments: appointments,
            weeks_completed: weeks,
        }
    }

    #[test]
    fn behind_on_everything_emits_rules_in_order() {
        let goals = Goals {
            target_appointments: 270,
            target_response_rate: 5.0,
            ..Goals::default()
        };
        let recs = recommendations(&goals, &totals(1000, 20, 0, 4), 2.0, 10.0);
        let categories: Vec<&str> = recs.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Lead Volume",
                "Infrastructure",
                "Lead Sourcing",
                "Messaging",
                "Follow-up",
                "Conversion"
            ]
        );
        assert!(recs.iter().all(|r| r.priority != Priority::Low));
        // ids are assigned in emission order
        assert_eq!(recs.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn lead_volume_math_uses_observed_rates() {
        let goals = Goals {
            target_appointments: 270,
            ..Goals::default()
        };
        // needed_replies = ceil(270 / 0.10) = 2700
        // needed_leads = ceil(2700 / 0.02) = 135,000
        let recs = recommendations(&goals, &totals(1000, 20, 0, 4), 2.0, 10.0);
        assert!(recs[0].action.contains("134000"));
        assert_eq!(recs[0].expected_impact, "270 more appointments needed");
        // 134,000 additional leads need ceil(134000/500) = 268 mailboxes
        assert!(recs[1].action.contains("268"));
    }

    #[test]
    fn zero_rates_fall_back_to_defaults() {
        let goals = Goals {
            target_appointments: 10,
            target_response_rate: 5.0,
            ..Goals::default()
        };
        // fallback: ceil(10/0.1)=100 replies, ceil(100/0.05)=2000 leads
        let recs = recommendations(&goals, &totals(0, 0, 0, 0), 0.0, 0.0);
        assert!(recs[0].action.contains("2000"));
    }

    #[test]
    fn on_track_campaign_gets_single_low_priority_record() {
        let goals = Goals {
            target_appointments: 10,
            target_response_rate: 5.0,
            ..Goals::default()
        };
        // goal met, rates above thresholds
        let recs = recommendations(&goals, &totals(1000, 100, 20, 4), 10.0, 20.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Low);
        assert_eq!(recs[0].category, "Performance");
    }

    #[test]
    fn surplus_leads_suppress_volume_rules() {
        let goals = Goals {
            target_appointments: 10,
            target_response_rate: 1.0,
            ..Goals::default()
        };
        // gap exists but lead pool already covers the requirement
        let recs = recommendations(&goals, &totals(1_000_000, 100, 5, 4), 10.0, 20.0);
        assert!(recs.iter().all(|r| r.category != "Lead Volume"));
    }
}
