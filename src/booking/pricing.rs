use crate::models::{DateRange, StayQuote};

/// Nights and total price for a date range at `nightly_price`.
///
/// Incomplete ranges and ranges where check-out is not after check-in
/// quote zero nights at zero cost.
pub fn compute_stay(range: &DateRange, nightly_price: f64) -> StayQuote {
    let (Some(from), Some(to)) = (range.from, range.to) else {
        return StayQuote::default();
    };

    let nights = u32::try_from((to - from).num_days().max(0)).unwrap_or(u32::MAX);

    StayQuote {
        nights,
        total_price: f64::from(nights) * nightly_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_end_quotes_nothing() {
        let range = DateRange {
            from: Some(day(2025, 6, 1)),
            to: None,
        };
        assert_eq!(compute_stay(&range, 115.0), StayQuote::default());
        assert_eq!(compute_stay(&DateRange::default(), 115.0), StayQuote::default());
    }

    #[test]
    fn test_three_nights() {
        let quote = compute_stay(&DateRange::new(day(2025, 6, 1), day(2025, 6, 4)), 115.0);
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total_price, 345.0);
    }

    #[test]
    fn test_same_day_is_zero() {
        for price in [1.0, 115.0, 299.99] {
            let d = day(2025, 2, 28);
            let quote = compute_stay(&DateRange::new(d, d), price);
            assert_eq!(quote.nights, 0);
            assert_eq!(quote.total_price, 0.0);
        }
    }

    #[test]
    fn test_reversed_range_clamps_to_zero() {
        let quote = compute_stay(&DateRange::new(day(2025, 6, 10), day(2025, 6, 1)), 200.0);
        assert_eq!(quote.nights, 0);
        assert_eq!(quote.total_price, 0.0);
    }

    #[test]
    fn test_spans_month_and_leap_day() {
        let quote = compute_stay(&DateRange::new(day(2024, 2, 27), day(2024, 3, 2)), 100.0);
        assert_eq!(quote.nights, 4);
    }

    #[test]
    fn test_extending_checkout_never_lowers_price() {
        let from = day(2025, 1, 1);
        let mut previous = 0.0;
        for offset in -3..30 {
            let to = from + Duration::days(offset);
            let quote = compute_stay(&DateRange::new(from, to), 175.0);
            assert!(quote.total_price >= previous, "price dropped at offset {offset}");
            previous = quote.total_price;
        }
    }
}
