/// Enriched leads are priced at $100 per batch of 5,000 ($0.02 each).
pub const COST_PER_LEAD: f64 = 100.0 / 5000.0;
pub const COST_PER_MAILBOX: f64 = 3.5;

/// Fixed split: 70% of the budget buys leads, 30% buys mailbox capacity.
pub const LEADS_SHARE: f64 = 0.7;
pub const MAILBOX_SHARE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
    pub allocated_budget: f64,
    pub budget_for_leads: f64,
    pub budget_for_mailboxes: f64,
    pub targeted_leads: i64,
    pub mailboxes: i64,
}

/// Split a budget into sourcing and infrastructure sub-budgets and the
/// whole quantities they buy. Informational only; nothing is reserved.
pub fn allocate(allocated_budget: f64) -> BudgetBreakdown {
    let budget_for_leads = allocated_budget * LEADS_SHARE;
    let budget_for_mailboxes = allocated_budget * MAILBOX_SHARE;
    BudgetBreakdown {
        allocated_budget,
        budget_for_leads,
        budget_for_mailboxes,
        targeted_leads: (budget_for_leads / COST_PER_LEAD).floor() as i64,
        mailboxes: (budget_for_mailboxes / COST_PER_MAILBOX).floor() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_conserves_the_budget() {
        for budget in [1.0, 99.99, 5000.0, 100_000_000.0] {
            let b = allocate(budget);
            assert!((b.budget_for_leads + b.budget_for_mailboxes - budget).abs() < 1e-6);
        }
    }

    #[test]
    fn five_thousand_dollar_example() {
        let b = allocate(5000.0);
        assert!((b.budget_for_leads - 3500.0).abs() < 1e-9);
        assert!((b.budget_for_mailboxes - 1500.0).abs() < 1e-9);
        assert_eq!(b.targeted_leads, 175_000);
        assert_eq!(b.mailboxes, 428);
    }

    #[test]
    fn quantities_floor_toward_zero() {
        let b = allocate(10.0);
        assert_eq!(b.targeted_leads, 350);
        assert_eq!(b.mailboxes, 0);
    }
}
