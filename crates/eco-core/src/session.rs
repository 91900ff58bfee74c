//! Per-calculator state: raw inputs, the last calculation and the random
//! source that feeds tips and simulated values.
//!
//! A session owns everything one calculator panel needs. Sessions never
//! share state, so the four panels of a page are four independent values.

use std::marker::PhantomData;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::calculator::{Calculator, Domain, ImpactResult};
use crate::chart::{ChartSeries, ChartSeriesAdapter, ChartStyle};
use crate::input::{FieldSpec, RawInputSet, ValidationError};
use crate::share::share_message;
use crate::tips::TipSelector;
use crate::view::ResultView;

#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub result: ImpactResult,
    pub tip: &'static str,
}

pub struct CalculatorSession<C: Calculator> {
    raw: RawInputSet,
    calculation: Option<Calculation>,
    chart: Option<ChartSeriesAdapter>,
    rng: StdRng,
    _calculator: PhantomData<C>,
}

impl<C: Calculator> CalculatorSession<C> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fixed seed so tips and simulated values repeat exactly.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            raw: RawInputSet::new(),
            calculation: None,
            chart: C::DOMAIN.has_chart().then(ChartSeriesAdapter::new),
            rng,
            _calculator: PhantomData,
        }
    }

    pub fn domain(&self) -> Domain {
        C::DOMAIN
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        C::FIELDS
    }

    pub fn set_field(&mut self, name: &str, text: &str) {
        self.raw.set(name, text);
    }

    pub fn raw(&self) -> &RawInputSet {
        &self.raw
    }

    /// Validate and compute from the current fields. On failure the previous
    /// calculation, if any, is kept as it was.
    pub fn calculate(&mut self) -> Result<&Calculation, ValidationError> {
        let result = C::calculate(&self.raw, &mut self.rng)?;
        let tip = TipSelector::new(C::TIPS).pick(&mut self.rng);
        log::info!(
            "[{}] calculated {:.2} {}",
            C::DOMAIN.slug(),
            result.total,
            C::DOMAIN.unit()
        );
        Ok(&*self.calculation.insert(Calculation { result, tip }))
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    pub fn view(&self) -> Option<ResultView> {
        self.calculation
            .as_ref()
            .map(|c| ResultView::assemble(&c.result, c.tip))
    }

    pub fn share_message(&self) -> Option<String> {
        self.calculation.as_ref().map(|c| share_message(&c.result))
    }

    pub fn chart_style(&self) -> Option<ChartStyle> {
        self.chart.map(|c| c.style())
    }

    /// Advance the chart style; `None` for domains without a chart.
    pub fn toggle_chart_style(&mut self) -> Option<ChartStyle> {
        self.chart.as_mut().map(ChartSeriesAdapter::toggle)
    }

    pub fn chart_series(&self) -> Option<ChartSeries> {
        let chart = self.chart.as_ref()?;
        let calculation = self.calculation.as_ref()?;
        Some(chart.series(&calculation.result))
    }

    /// Drop inputs, result and chart style in one step. The random source
    /// carries on from where it was.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
        log::debug!("[{}] reset", C::DOMAIN.slug());
    }
}

impl<C: Calculator> Default for CalculatorSession<C> {
    fn default() -> Self {
        Self::new()
    }
}
