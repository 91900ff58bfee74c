//! Shareable one-line summaries of a calculation.

use std::fmt::Debug;

use crate::calculator::{ImpactResult, Metrics};
use crate::constants::CURRENCY_SYMBOL;

/// Render the share text for a result. Pure; the clipboard write is the
/// caller's business.
pub fn share_message(result: &ImpactResult) -> String {
    let total = result.total;
    match &result.metrics {
        Metrics::Carbon {
            trees_needed,
            percent_of_global_average,
        } => format!(
            "My estimated annual carbon footprint is {total:.2} kg CO2e, {percent_of_global_average}% of the global average. It would take {trees_needed} trees a year to offset it! 🌍 #EcoTech #CarbonFootprint"
        ),
        Metrics::Electricity(m) => format!(
            "My estimated annual electricity consumption is {total:.2} kWh, costing approximately {c}{:.2}. This results in a carbon footprint of {:.2} kg CO2e. I could save {c}{:.2} annually! ⚡ #EcoTech #EnergyConservation",
            m.annual_cost,
            m.carbon_kg,
            m.potential_savings,
            c = CURRENCY_SYMBOL,
        ),
        Metrics::Water(m) => format!(
            "My estimated annual water consumption is {total:.2} Liters, costing approximately {c}{:.2}. This results in a carbon footprint of {:.2} kg CO2e. I could save {c}{:.2} annually! 💧 #EcoTech #WaterConservation",
            m.annual_cost,
            m.carbon_kg,
            m.potential_savings,
            c = CURRENCY_SYMBOL,
        ),
        Metrics::Plastic {
            ocean_impact_bottles,
            ..
        } => format!(
            "My estimated annual plastic waste is {total:.2} kg, which is equivalent to {ocean_impact_bottles} plastic bottles in the ocean! Let's reduce our plastic footprint together. #EcoTech #PlasticWaste"
        ),
    }
}

/// Outcome of handing a share message to the clipboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareStatus {
    Copied,
    /// Clipboard unavailable; the text is handed back for manual copy.
    ManualCopy(String),
}

impl ShareStatus {
    pub fn settle<E: Debug>(message: String, outcome: Result<(), E>) -> Self {
        match outcome {
            Ok(()) => ShareStatus::Copied,
            Err(e) => {
                log::warn!("[share] clipboard write failed: {:?}", e);
                ShareStatus::ManualCopy(message)
            }
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            ShareStatus::Copied => "Copied to clipboard!",
            ShareStatus::ManualCopy(_) => "Copy the text below to share",
        }
    }
}
