//! Delivery-date formatting

use crate::config::DeliveryDateStyle;
use chrono::{Datelike, NaiveDate};

/// Format the delivery line for the newsletter header.
///
/// Month and day are plain decimal numbers without zero padding.
pub fn format_delivery(date: NaiveDate, style: DeliveryDateStyle) -> String {
    match style {
        DeliveryDateStyle::MonthDay => {
            format!("📅 {}月{}日配信号", date.month(), date.day())
        }
        DeliveryDateStyle::YearMonthDay => {
            format!(
                "📅 {}年{}月{}日配信号",
                date.year(),
                date.month(),
                date.day()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_month_day_style() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(
            format_delivery(date, DeliveryDateStyle::MonthDay),
            "📅 9月1日配信号"
        );
    }

    #[test]
    fn test_year_month_day_style() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(
            format_delivery(date, DeliveryDateStyle::YearMonthDay),
            "📅 2025年9月1日配信号"
        );
    }

    #[test]
    fn test_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            format_delivery(date, DeliveryDateStyle::YearMonthDay),
            "📅 2026年1月5日配信号"
        );
    }

    #[test]
    fn test_double_digit_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(
            format_delivery(date, DeliveryDateStyle::MonthDay),
            "📅 12月25日配信号"
        );
    }
}
