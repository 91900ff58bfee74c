//! Household electricity consumption, cost and grid carbon.

use rand::Rng;
use smallvec::smallvec;

use crate::calculator::{
    Band, BreakdownEntry, Calculator, Consumption, Domain, ImpactResult, Metrics, UtilityMetrics,
};
use crate::constants::*;
use crate::input::{FieldSpec, ValidatedInputSet};
use crate::tips::ELECTRICITY_TIPS;

pub struct Electricity;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElectricityInput {
    pub monthly_bill: f64,
    pub cost_per_kwh: f64,
    pub people: f64,
    pub ac_hours_per_day: f64,
    pub fridges: f64,
    pub washing_loads_per_week: f64,
    pub tv_hours_per_day: f64,
}

impl Default for ElectricityInput {
    fn default() -> Self {
        Self {
            monthly_bill: 0.0,
            cost_per_kwh: DEFAULT_ELEC_COST_PER_KWH,
            people: DEFAULT_PEOPLE_IN_HOUSEHOLD,
            ac_hours_per_day: 0.0,
            fridges: 0.0,
            washing_loads_per_week: 0.0,
            tv_hours_per_day: 0.0,
        }
    }
}

const INPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("bill", "Monthly electricity bill"),
    FieldSpec::positive("cost_per_unit", "Electricity cost per kWh", DEFAULT_ELEC_COST_PER_KWH),
    FieldSpec::positive("people", "Number of people", DEFAULT_PEOPLE_IN_HOUSEHOLD).whole(),
    FieldSpec::optional("ac_hours", "AC hours per day"),
    FieldSpec::optional("fridges", "Number of refrigerators").whole(),
    FieldSpec::optional("washing_loads", "Washing machine loads per week"),
    FieldSpec::optional("tv_hours", "TV hours per day"),
];

impl Calculator for Electricity {
    type Input = ElectricityInput;

    const DOMAIN: Domain = Domain::Electricity;
    const FIELDS: &'static [FieldSpec] = INPUT_FIELDS;
    const TIPS: &'static [&'static str] = ELECTRICITY_TIPS;

    fn input(validated: &ValidatedInputSet) -> ElectricityInput {
        ElectricityInput {
            monthly_bill: validated.value("bill"),
            cost_per_kwh: validated.value("cost_per_unit"),
            people: validated.value("people"),
            ac_hours_per_day: validated.value("ac_hours"),
            fridges: validated.value("fridges"),
            washing_loads_per_week: validated.value("washing_loads"),
            tv_hours_per_day: validated.value("tv_hours"),
        }
    }

    fn compute<R: Rng + ?Sized>(input: &ElectricityInput, _rng: &mut R) -> ImpactResult {
        // Daily kWh per appliance
        let ac = input.ac_hours_per_day * AC_POWER_KW;
        let fridge = input.fridges * FRIDGE_KWH_PER_DAY;
        let washing = input.washing_loads_per_week * WASHING_MACHINE_KWH_PER_LOAD / DAYS_PER_WEEK;
        let tv = input.tv_hours_per_day * TV_POWER_KW * input.people;

        let consumption = Consumption::resolve(
            input.monthly_bill,
            input.cost_per_kwh,
            (ac + fridge + washing + tv) * DAYS_PER_YEAR,
        );
        let total = consumption.annual();
        let breakdown = match consumption {
            Consumption::Billed { annual } => smallvec![BreakdownEntry::new("Billed usage", annual)],
            Consumption::Estimated { .. } => smallvec![
                BreakdownEntry::new("Air Conditioning", ac * DAYS_PER_YEAR),
                BreakdownEntry::new("Refrigerators", fridge * DAYS_PER_YEAR),
                BreakdownEntry::new("Washing Machine", washing * DAYS_PER_YEAR),
                BreakdownEntry::new("Television", tv * DAYS_PER_YEAR),
            ],
        };

        let annual_cost = total * input.cost_per_kwh;
        ImpactResult {
            domain: Domain::Electricity,
            total,
            breakdown,
            band: Band::classify(total, ELEC_MODERATE_ABOVE_KWH, ELEC_HIGH_ABOVE_KWH),
            metrics: Metrics::Electricity(UtilityMetrics {
                consumption,
                daily: total / DAYS_PER_YEAR,
                annual_cost,
                carbon_kg: total * GRID_CARBON_KG_PER_KWH,
                potential_savings: annual_cost * SAVINGS_FRACTION,
            }),
        }
    }
}
