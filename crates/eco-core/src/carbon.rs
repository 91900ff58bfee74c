//! Annual carbon footprint from household energy use and travel.
//!
//! Monthly quantities are annualized ×12; flights are entered per year and
//! used as-is. Each category applies a fixed emission factor and the
//! categories are summed into the total.

use rand::Rng;
use smallvec::smallvec;

use crate::calculator::{Band, BreakdownEntry, Calculator, Domain, ImpactResult, Metrics};
use crate::constants::*;
use crate::input::{FieldSpec, ValidatedInputSet};
use crate::tips::CARBON_TIPS;

pub struct Carbon;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarbonInput {
    pub electricity_kwh_per_month: f64,
    pub gas_therms_per_month: f64,
    pub car_miles_per_month: f64,
    pub flights_per_year: f64,
}

const INPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("electricity", "Electricity (kWh per month)"),
    FieldSpec::optional("gas", "Natural gas (therms per month)"),
    FieldSpec::optional("car", "Car travel (miles per month)"),
    FieldSpec::optional("flights", "Flights per year"),
];

impl Calculator for Carbon {
    type Input = CarbonInput;

    const DOMAIN: Domain = Domain::Carbon;
    const FIELDS: &'static [FieldSpec] = INPUT_FIELDS;
    const TIPS: &'static [&'static str] = CARBON_TIPS;

    fn input(validated: &ValidatedInputSet) -> CarbonInput {
        CarbonInput {
            electricity_kwh_per_month: validated.value("electricity"),
            gas_therms_per_month: validated.value("gas"),
            car_miles_per_month: validated.value("car"),
            flights_per_year: validated.value("flights"),
        }
    }

    fn compute<R: Rng + ?Sized>(input: &CarbonInput, _rng: &mut R) -> ImpactResult {
        let electricity = input.electricity_kwh_per_month * CARBON_KG_PER_KWH * MONTHS_PER_YEAR;
        let gas = input.gas_therms_per_month * CARBON_KG_PER_THERM * MONTHS_PER_YEAR;
        let car = input.car_miles_per_month * CARBON_KG_PER_MILE * MONTHS_PER_YEAR;
        let flights = input.flights_per_year * CARBON_KG_PER_FLIGHT;
        let total = electricity + gas + car + flights;

        ImpactResult {
            domain: Domain::Carbon,
            total,
            breakdown: smallvec![
                BreakdownEntry::new("Electricity", electricity),
                BreakdownEntry::new("Natural Gas", gas),
                BreakdownEntry::new("Car Travel", car),
                BreakdownEntry::new("Flights", flights),
            ],
            band: Band::classify(total, CARBON_AVERAGE_ABOVE, CARBON_HIGH_ABOVE),
            metrics: Metrics::Carbon {
                trees_needed: (total / TREE_OFFSET_KG_PER_YEAR).ceil() as u64,
                percent_of_global_average: (total / GLOBAL_AVERAGE_KG_PER_YEAR * 100.0).round()
                    as u64,
            },
        }
    }
}
