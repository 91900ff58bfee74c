//! Household water consumption, cost and the carbon of heating and treating it.

use rand::Rng;
use smallvec::smallvec;

use crate::calculator::{
    Band, BreakdownEntry, Calculator, Consumption, Domain, ImpactResult, Metrics, UtilityMetrics,
};
use crate::constants::*;
use crate::input::{FieldSpec, ValidatedInputSet};
use crate::tips::WATER_TIPS;

pub struct Water;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterInput {
    pub monthly_bill: f64,
    pub cost_per_liter: f64,
    pub people: f64,
    pub showers_per_day: f64,
    pub shower_minutes: f64,
    pub washing_loads_per_week: f64,
    pub dishwasher_loads_per_week: f64,
    pub garden_hours_per_week: f64,
}

impl Default for WaterInput {
    fn default() -> Self {
        Self {
            monthly_bill: 0.0,
            cost_per_liter: DEFAULT_WATER_COST_PER_LITER,
            people: DEFAULT_PEOPLE_IN_HOUSEHOLD,
            showers_per_day: 0.0,
            shower_minutes: 0.0,
            washing_loads_per_week: 0.0,
            dishwasher_loads_per_week: 0.0,
            garden_hours_per_week: 0.0,
        }
    }
}

const INPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("bill", "Monthly water bill"),
    FieldSpec::positive("cost_per_unit", "Water cost per liter", DEFAULT_WATER_COST_PER_LITER),
    FieldSpec::positive("people", "Number of people", DEFAULT_PEOPLE_IN_HOUSEHOLD).whole(),
    FieldSpec::optional("showers", "Showers per day"),
    FieldSpec::optional("shower_minutes", "Shower duration (minutes)"),
    FieldSpec::optional("washing_loads", "Washing machine loads per week"),
    FieldSpec::optional("dishwasher_loads", "Dishwasher loads per week"),
    FieldSpec::optional("garden_hours", "Garden watering hours per week"),
];

impl Calculator for Water {
    type Input = WaterInput;

    const DOMAIN: Domain = Domain::Water;
    const FIELDS: &'static [FieldSpec] = INPUT_FIELDS;
    const TIPS: &'static [&'static str] = WATER_TIPS;

    fn input(validated: &ValidatedInputSet) -> WaterInput {
        WaterInput {
            monthly_bill: validated.value("bill"),
            cost_per_liter: validated.value("cost_per_unit"),
            people: validated.value("people"),
            showers_per_day: validated.value("showers"),
            shower_minutes: validated.value("shower_minutes"),
            washing_loads_per_week: validated.value("washing_loads"),
            dishwasher_loads_per_week: validated.value("dishwasher_loads"),
            garden_hours_per_week: validated.value("garden_hours"),
        }
    }

    fn compute<R: Rng + ?Sized>(input: &WaterInput, _rng: &mut R) -> ImpactResult {
        // Daily liters per fixture
        let showers =
            input.showers_per_day * input.shower_minutes * SHOWER_LITERS_PER_MINUTE * input.people;
        let washing = input.washing_loads_per_week * WASHING_MACHINE_LITERS_PER_LOAD / DAYS_PER_WEEK;
        let dishwasher = input.dishwasher_loads_per_week * DISHWASHER_LITERS_PER_LOAD / DAYS_PER_WEEK;
        let garden = input.garden_hours_per_week * GARDEN_LITERS_PER_HOUR / DAYS_PER_WEEK;

        let consumption = Consumption::resolve(
            input.monthly_bill,
            input.cost_per_liter,
            (showers + washing + dishwasher + garden) * DAYS_PER_YEAR,
        );
        let total = consumption.annual();
        let breakdown = match consumption {
            Consumption::Billed { annual } => smallvec![BreakdownEntry::new("Billed usage", annual)],
            Consumption::Estimated { .. } => smallvec![
                BreakdownEntry::new("Showers", showers * DAYS_PER_YEAR),
                BreakdownEntry::new("Washing Machine", washing * DAYS_PER_YEAR),
                BreakdownEntry::new("Dishwasher", dishwasher * DAYS_PER_YEAR),
                BreakdownEntry::new("Garden", garden * DAYS_PER_YEAR),
            ],
        };

        // Heating always follows the usage fields; garden water is never heated.
        let heated_liters =
            (showers + washing + dishwasher) * HEATED_WATER_FRACTION * DAYS_PER_YEAR;
        let heating_carbon = heated_liters * HEATING_KWH_PER_LITER * GRID_CARBON_KG_PER_KWH;
        let treatment_carbon = total * TREATMENT_CARBON_KG_PER_LITER;

        let annual_cost = total * input.cost_per_liter;
        ImpactResult {
            domain: Domain::Water,
            total,
            breakdown,
            band: Band::classify(total, WATER_MODERATE_ABOVE_LITERS, WATER_HIGH_ABOVE_LITERS),
            metrics: Metrics::Water(UtilityMetrics {
                consumption,
                daily: total / DAYS_PER_YEAR,
                annual_cost,
                carbon_kg: heating_carbon + treatment_carbon,
                potential_savings: annual_cost * SAVINGS_FRACTION,
            }),
        }
    }
}
