//! Annual single-use plastic waste by item category.
//!
//! Item counts are weighted by a per-item mass and scaled by how often they
//! are used; gram-based categories are monthly and converted to kg. The
//! recycling rate is simulated, so it is the only field drawn from the
//! random source.

use rand::Rng;
use smallvec::smallvec;

use crate::calculator::{Band, BreakdownEntry, Calculator, Domain, ImpactResult, Metrics};
use crate::constants::*;
use crate::input::{FieldSpec, ValidatedInputSet};
use crate::tips::PLASTIC_TIPS;

pub struct Plastic;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlasticInput {
    pub bottles_per_week: f64,
    pub bags_per_week: f64,
    pub packaging_grams_per_month: f64,
    pub straws_per_day: f64,
    pub cutlery_per_week: f64,
    pub containers_per_week: f64,
    pub other_grams_per_month: f64,
}

const INPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("bottles", "Plastic bottles per week"),
    FieldSpec::optional("bags", "Plastic bags per week"),
    FieldSpec::optional("packaging", "Packaging (grams per month)"),
    FieldSpec::optional("straws", "Straws per day"),
    FieldSpec::optional("cutlery", "Plastic cutlery per week"),
    FieldSpec::optional("containers", "Takeout containers per week"),
    FieldSpec::optional("other", "Other plastic items (grams per month)"),
];

impl Calculator for Plastic {
    type Input = PlasticInput;

    const DOMAIN: Domain = Domain::Plastic;
    const FIELDS: &'static [FieldSpec] = INPUT_FIELDS;
    const TIPS: &'static [&'static str] = PLASTIC_TIPS;

    fn input(validated: &ValidatedInputSet) -> PlasticInput {
        PlasticInput {
            bottles_per_week: validated.value("bottles"),
            bags_per_week: validated.value("bags"),
            packaging_grams_per_month: validated.value("packaging"),
            straws_per_day: validated.value("straws"),
            cutlery_per_week: validated.value("cutlery"),
            containers_per_week: validated.value("containers"),
            other_grams_per_month: validated.value("other"),
        }
    }

    fn compute<R: Rng + ?Sized>(input: &PlasticInput, rng: &mut R) -> ImpactResult {
        let bottles = input.bottles_per_week * WEEKS_PER_YEAR * BOTTLE_KG;
        let bags = input.bags_per_week * WEEKS_PER_YEAR * BAG_KG;
        let packaging = input.packaging_grams_per_month * MONTHS_PER_YEAR / GRAMS_PER_KG;
        let straws = input.straws_per_day * DAYS_PER_YEAR * STRAW_KG;
        let cutlery = input.cutlery_per_week * WEEKS_PER_YEAR * CUTLERY_KG;
        let containers = input.containers_per_week * WEEKS_PER_YEAR * CONTAINER_KG;
        let other = input.other_grams_per_month * MONTHS_PER_YEAR / GRAMS_PER_KG;
        let total = bottles + bags + packaging + straws + cutlery + containers + other;

        let bags_per_year = input.bags_per_week * WEEKS_PER_YEAR;
        let recycling_rate =
            rng.gen::<f64>() * RECYCLING_RATE_SPAN_PERCENT + RECYCLING_RATE_MIN_PERCENT;

        ImpactResult {
            domain: Domain::Plastic,
            total,
            breakdown: smallvec![
                BreakdownEntry::new("Bottles", bottles),
                BreakdownEntry::new("Bags", bags),
                BreakdownEntry::new("Packaging", packaging),
                BreakdownEntry::new("Straws", straws),
                BreakdownEntry::new("Cutlery", cutlery),
                BreakdownEntry::new("Containers", containers),
                BreakdownEntry::new("Other Items", other),
            ],
            band: Band::classify(total, PLASTIC_MODERATE_ABOVE_KG, PLASTIC_HIGH_ABOVE_KG),
            metrics: Metrics::Plastic {
                ocean_impact_bottles: (total / STANDARD_BOTTLE_KG).ceil() as u64,
                bags_saved: (AVERAGE_BAGS_PER_YEAR - bags_per_year).max(0.0),
                microplastics_grams: total * GRAMS_PER_KG * MICROPLASTIC_CONVERSION_FACTOR,
                recycling_rate_percent: recycling_rate.round() as u32,
            },
        }
    }
}
