//! Presentation-ready summary of one calculation.
//!
//! [`ResultView::assemble`] is the only place numbers are turned into text:
//! amounts get two decimals, currency gets the locale prefix, counts stay
//! integral.

use std::fmt;

use crate::calculator::{ImpactResult, Metrics, UtilityMetrics};
use crate::constants::CURRENCY_SYMBOL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRow {
    pub label: &'static str,
    pub value: String,
}

impl ViewRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub title: &'static str,
    pub headline: String,
    pub band: &'static str,
    pub metrics: Vec<ViewRow>,
    pub breakdown_heading: String,
    pub breakdown: Vec<ViewRow>,
    pub tip: String,
}

#[inline]
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[inline]
pub fn format_currency(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, value)
}

impl ResultView {
    pub fn assemble(result: &ImpactResult, tip: &str) -> Self {
        let unit = result.domain.unit();
        let metrics = match &result.metrics {
            Metrics::Carbon {
                trees_needed,
                percent_of_global_average,
            } => vec![
                ViewRow::new("🌳 Trees to Offset", format!("{} trees", trees_needed)),
                ViewRow::new(
                    "🌍 Global Average",
                    format!("{}% of average", percent_of_global_average),
                ),
            ],
            Metrics::Electricity(m) => utility_rows(m, "⚡ Daily Usage", "kWh"),
            Metrics::Water(m) => utility_rows(m, "💧 Daily Usage", "Liters"),
            Metrics::Plastic {
                ocean_impact_bottles,
                bags_saved,
                microplastics_grams,
                recycling_rate_percent,
            } => vec![
                ViewRow::new("🐠 Ocean Impact", format!("{} bottles", ocean_impact_bottles)),
                ViewRow::new("♻️ Bags Saved", format!("{} bags", format_amount(*bags_saved))),
                ViewRow::new("🔬 Microplastics", format!("{} g", format_amount(*microplastics_grams))),
                ViewRow::new("🔄 Recycling Rate", format!("{}%", recycling_rate_percent)),
            ],
        };
        let breakdown = result
            .breakdown
            .iter()
            .map(|e| ViewRow::new(e.category, format_amount(e.value)))
            .collect();

        Self {
            title: result.domain.result_title(),
            headline: format!("{} {}", format_amount(result.total), unit),
            band: result.band_message(),
            metrics,
            breakdown_heading: format!("📊 Breakdown ({}/year)", unit),
            breakdown,
            tip: tip.to_string(),
        }
    }
}

fn utility_rows(m: &UtilityMetrics, daily_label: &'static str, unit: &str) -> Vec<ViewRow> {
    vec![
        ViewRow::new("💸 Annual Cost", format_currency(m.annual_cost)),
        ViewRow::new("🌍 Carbon Footprint", format!("{} kg CO₂e", format_amount(m.carbon_kg))),
        ViewRow::new("💡 Potential Savings", format_currency(m.potential_savings)),
        ViewRow::new(daily_label, format!("{} {}", format_amount(m.daily), unit)),
        ViewRow::new("📋 Based On", m.consumption.describe().to_string()),
    ]
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", self.band)?;
        writeln!(f)?;

        for row in &self.metrics {
            writeln!(f, "  {:<22} {}", row.label, row.value)?;
        }
        writeln!(f)?;

        writeln!(f, "{}:", self.breakdown_heading)?;
        for row in &self.breakdown {
            writeln!(f, "  • {}: {}", row.label, row.value)?;
        }
        writeln!(f)?;

        write!(f, "🌱 Tip: {}", self.tip)
    }
}
