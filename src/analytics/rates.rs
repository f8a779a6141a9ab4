/// Replies received per lead contacted, as a percentage.
/// Any zero denominator yields 0.0, never NaN.
pub fn response_rate(total_replies: i64, total_leads: i64) -> f64 {
    if total_leads > 0 && total_replies > 0 {
        (total_replies as f64 / total_leads as f64) * 100.0
    } else {
        0.0
    }
}

/// Appointments booked per reply received, as a percentage.
pub fn conversion_rate(total_appointments: i64, total_replies: i64) -> f64 {
    if total_replies > 0 {
        (total_appointments as f64 / total_replies as f64) * 100.0
    } else {
        0.0
    }
}

/// Display rounding only. Downstream math keeps full precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominators_yield_zero() {
        assert_eq!(response_rate(0, 0), 0.0);
        assert_eq!(response_rate(5, 0), 0.0);
        assert_eq!(conversion_rate(10, 0), 0.0);
    }

    #[test]
    fn rates_are_percentages() {
        assert!((response_rate(5, 100) - 5.0).abs() < 1e-9);
        assert!((conversion_rate(3, 20) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert!((round1(3.456) - 3.5).abs() < 1e-9);
        assert!((round1(2.04) - 2.0).abs() < 1e-9);
    }
}
