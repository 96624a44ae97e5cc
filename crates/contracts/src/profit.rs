//! Profit analysis domain types and the computation behind the predict form.

use serde::{Deserialize, Serialize};

/// One sales transaction as entered on the predict form.
///
/// Transient: lives only in the active screen's state and is dropped when the
/// screen unmounts. Serde names match the exported CSV column headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub retailer: String,
    pub region: String,
    pub state: String,
    pub city: String,
    pub product: String,
    pub price_per_unit: f64,
    pub unit_sold: f64,
    pub cost_per_unit: f64,
}

impl FormEntry {
    pub fn total_sales(&self) -> f64 {
        self.price_per_unit * self.unit_sold
    }

    pub fn total_cost(&self) -> f64 {
        self.cost_per_unit * self.unit_sold
    }
}

/// Derived profit metrics, rounded to two decimals at computation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    pub profit_amount: f64,
    pub profit_percentage: f64,
}

/// One accumulated row of the predict screen: the entry plus its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitRecord {
    #[serde(flatten)]
    pub entry: FormEntry,
    #[serde(flatten)]
    pub result: ProfitResult,
}

/// Numeric form fields coerce silently: empty or unparseable input counts
/// as zero, the input is never rejected.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes profit metrics from a form entry.
///
/// `profit_amount = price × units − cost × units`;
/// `profit_percentage = profit_amount / (cost × units) × 100`, defined as
/// zero when the total cost is zero. Always succeeds.
pub fn compute_profit(entry: &FormEntry) -> ProfitResult {
    let total_cost = entry.total_cost();
    let profit_amount = entry.total_sales() - total_cost;
    let profit_percentage = if total_cost == 0.0 {
        0.0
    } else {
        profit_amount / total_cost * 100.0
    };

    ProfitResult {
        profit_amount: round2(profit_amount),
        profit_percentage: round2(profit_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(price: f64, units: f64, cost: f64) -> FormEntry {
        FormEntry {
            price_per_unit: price,
            unit_sold: units,
            cost_per_unit: cost,
            ..FormEntry::default()
        }
    }

    #[test]
    fn computes_profit_and_percentage() {
        let e = entry(10.0, 5.0, 6.0);
        assert_eq!(e.total_sales(), 50.0);
        assert_eq!(e.total_cost(), 30.0);

        let result = compute_profit(&e);
        assert_eq!(result.profit_amount, 20.0);
        assert_eq!(result.profit_percentage, 66.67);
    }

    #[test]
    fn all_zero_entry_yields_zero_metrics() {
        let result = compute_profit(&entry(0.0, 0.0, 0.0));
        assert_eq!(result.profit_amount, 0.0);
        assert_eq!(result.profit_percentage, 0.0);
    }

    #[test]
    fn zero_total_cost_suppresses_percentage() {
        // Revenue without cost: amount is real, percentage is defined as 0.
        let result = compute_profit(&entry(10.0, 5.0, 0.0));
        assert_eq!(result.profit_amount, 50.0);
        assert_eq!(result.profit_percentage, 0.0);
    }

    #[test]
    fn zero_units_suppresses_percentage() {
        let result = compute_profit(&entry(10.0, 0.0, 6.0));
        assert_eq!(result.profit_amount, 0.0);
        assert_eq!(result.profit_percentage, 0.0);
    }

    #[test]
    fn negative_margin() {
        let result = compute_profit(&entry(4.0, 10.0, 5.0));
        assert_eq!(result.profit_amount, -10.0);
        assert_eq!(result.profit_percentage, -20.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1/3 of the cost as profit: 33.333...% -> 33.33
        let result = compute_profit(&entry(4.0, 3.0, 3.0));
        assert_eq!(result.profit_amount, 3.0);
        assert_eq!(result.profit_percentage, 33.33);
    }

    #[test]
    fn coerces_invalid_numbers_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("12,5"), 0.0);
        assert_eq!(coerce_number("10"), 10.0);
        assert_eq!(coerce_number(" 10.5 "), 10.5);
        assert_eq!(coerce_number("-3"), -3.0);
    }

    #[test]
    fn invalid_field_behaves_like_zero() {
        let typed = entry(coerce_number("ten"), coerce_number("5"), coerce_number("6"));
        assert_eq!(compute_profit(&typed), compute_profit(&entry(0.0, 5.0, 6.0)));
    }
}
