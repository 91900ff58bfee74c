//! The shared calculator contract and the result types every domain produces.

use rand::Rng;
use smallvec::SmallVec;

use crate::input::{FieldSpec, InputValidator, RawInputSet, ValidatedInputSet, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Carbon,
    Electricity,
    Water,
    Plastic,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Carbon,
        Domain::Electricity,
        Domain::Water,
        Domain::Plastic,
    ];

    /// Stable lowercase identifier used for element ids and CLI names.
    pub fn slug(self) -> &'static str {
        match self {
            Domain::Carbon => "carbon",
            Domain::Electricity => "electricity",
            Domain::Water => "water",
            Domain::Plastic => "plastic",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.slug() == slug)
    }

    /// Unit of `ImpactResult::total` for this domain.
    pub fn unit(self) -> &'static str {
        match self {
            Domain::Carbon => "kg CO₂e",
            Domain::Electricity => "kWh",
            Domain::Water => "Liters",
            Domain::Plastic => "kg",
        }
    }

    pub fn result_title(self) -> &'static str {
        match self {
            Domain::Carbon => "Your Annual Carbon Footprint",
            Domain::Electricity => "Your Annual Electricity Usage",
            Domain::Water => "Your Annual Water Usage",
            Domain::Plastic => "Your Annual Plastic Usage",
        }
    }

    /// Blocking message shown when validation rejects the form.
    pub fn alert_message(self) -> &'static str {
        match self {
            Domain::Carbon => "Please enter non-negative values for your carbon footprint inputs.",
            Domain::Electricity => "Please enter valid non-negative values. Electricity cost per kWh, and number of people must be greater than zero.",
            Domain::Water => "Please enter valid non-negative values. Water cost per liter, and number of people must be greater than zero.",
            Domain::Plastic => "Please enter non-negative values for plastic consumption.",
        }
    }

    /// Only the carbon calculator renders a breakdown chart.
    pub fn has_chart(self) -> bool {
        matches!(self, Domain::Carbon)
    }
}

/// Qualitative banding of a domain total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Low,
    Moderate,
    High,
}

impl Band {
    /// Strictly-greater-than thresholds: a total equal to `moderate_above`
    /// is still `Low`.
    pub fn classify(total: f64, moderate_above: f64, high_above: f64) -> Band {
        if total > high_above {
            Band::High
        } else if total > moderate_above {
            Band::Moderate
        } else {
            Band::Low
        }
    }

    pub fn message(self, domain: Domain) -> &'static str {
        match (domain, self) {
            (Domain::Carbon, Band::High) => "Above average - consider reducing!",
            (Domain::Carbon, Band::Moderate) => "Average footprint",
            (Domain::Carbon, Band::Low) => "Great! Below average footprint",
            (Domain::Plastic, Band::High) => "High usage - time to reduce!",
            (_, Band::High) => "High usage - time to conserve!",
            (_, Band::Moderate) => "Moderate usage",
            (_, Band::Low) => "Low usage - well done!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakdownEntry {
    pub category: &'static str,
    pub value: f64,
}

impl BreakdownEntry {
    pub const fn new(category: &'static str, value: f64) -> Self {
        Self { category, value }
    }
}

pub type Breakdown = SmallVec<[BreakdownEntry; 8]>;

/// Where the annual consumption figure came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Consumption {
    /// `bill / cost_per_unit × 12`.
    Billed { annual: f64 },
    /// Built bottom-up from appliance or fixture usage.
    Estimated { annual: f64 },
}

impl Consumption {
    /// Billing data wins whenever both the bill and the unit cost are positive.
    pub fn resolve(monthly_bill: f64, cost_per_unit: f64, estimated_annual: f64) -> Self {
        if monthly_bill > 0.0 && cost_per_unit > 0.0 {
            Consumption::Billed {
                annual: monthly_bill / cost_per_unit * crate::constants::MONTHS_PER_YEAR,
            }
        } else {
            Consumption::Estimated {
                annual: estimated_annual,
            }
        }
    }

    pub fn annual(self) -> f64 {
        match self {
            Consumption::Billed { annual } | Consumption::Estimated { annual } => annual,
        }
    }

    pub fn is_billed(self) -> bool {
        matches!(self, Consumption::Billed { .. })
    }

    pub fn describe(self) -> &'static str {
        match self {
            Consumption::Billed { .. } => "Monthly bill",
            Consumption::Estimated { .. } => "Usage estimate",
        }
    }
}

/// Derived metrics for the two billed utilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtilityMetrics {
    pub consumption: Consumption,
    pub daily: f64,
    pub annual_cost: f64,
    pub carbon_kg: f64,
    pub potential_savings: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Metrics {
    Carbon {
        trees_needed: u64,
        percent_of_global_average: u64,
    },
    Electricity(UtilityMetrics),
    Water(UtilityMetrics),
    Plastic {
        ocean_impact_bottles: u64,
        bags_saved: f64,
        microplastics_grams: f64,
        recycling_rate_percent: u32,
    },
}

/// Output of one calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactResult {
    pub domain: Domain,
    /// Annual figure in `domain.unit()`.
    pub total: f64,
    pub breakdown: Breakdown,
    pub band: Band,
    pub metrics: Metrics,
}

impl ImpactResult {
    pub fn breakdown_sum(&self) -> f64 {
        self.breakdown.iter().map(|e| e.value).sum()
    }

    pub fn band_message(&self) -> &'static str {
        self.band.message(self.domain)
    }

    /// True when the total, every breakdown entry and every fractional
    /// metric is a finite number.
    pub fn is_finite(&self) -> bool {
        let metrics_finite = match &self.metrics {
            Metrics::Carbon { .. } => true,
            Metrics::Electricity(m) | Metrics::Water(m) => [
                m.consumption.annual(),
                m.daily,
                m.annual_cost,
                m.carbon_kg,
                m.potential_savings,
            ]
            .iter()
            .all(|v| v.is_finite()),
            Metrics::Plastic {
                bags_saved,
                microplastics_grams,
                ..
            } => bags_saved.is_finite() && microplastics_grams.is_finite(),
        };
        self.total.is_finite()
            && self.breakdown.iter().all(|e| e.value.is_finite())
            && metrics_finite
    }
}

/// One environmental-impact domain: its field table, tip list and formula.
pub trait Calculator {
    type Input;

    const DOMAIN: Domain;
    const FIELDS: &'static [FieldSpec];
    const TIPS: &'static [&'static str];

    fn input(validated: &ValidatedInputSet) -> Self::Input;

    /// Deterministic for a given input and random source state.
    fn compute<R: Rng + ?Sized>(input: &Self::Input, rng: &mut R) -> ImpactResult;

    fn validator() -> InputValidator {
        InputValidator::new(Self::FIELDS)
    }

    /// Validate then compute; no result is produced when validation fails or
    /// the computed figures overflow.
    fn calculate<R: Rng + ?Sized>(
        raw: &RawInputSet,
        rng: &mut R,
    ) -> Result<ImpactResult, ValidationError> {
        let validated = Self::validator().validate(raw)?;
        let result = Self::compute(&Self::input(&validated), rng);
        if !result.is_finite() {
            log::warn!("[{}] result overflowed: {:?}", Self::DOMAIN.slug(), result.total);
            return Err(ValidationError::Overflow {
                domain: Self::DOMAIN.slug(),
            });
        }
        log::debug!(
            "[{}] total={:.2} {} band={:?}",
            Self::DOMAIN.slug(),
            result.total,
            Self::DOMAIN.unit(),
            result.band
        );
        Ok(result)
    }
}
