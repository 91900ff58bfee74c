//! Chart data for the carbon breakdown.
//!
//! The adapter only produces labels, values and a style name; drawing is
//! left to whatever charting library the front-end uses.

use crate::calculator::ImpactResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartStyle {
    #[default]
    Doughnut,
    Bar,
    Line,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [ChartStyle::Doughnut, ChartStyle::Bar, ChartStyle::Line];

    /// Advance one step, wrapping after `Line`.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartStyle::Doughnut => "doughnut",
            ChartStyle::Bar => "bar",
            ChartStyle::Line => "line",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: ChartStyle,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartSeriesAdapter {
    style: ChartStyle,
}

impl ChartSeriesAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn toggle(&mut self) -> ChartStyle {
        self.style = self.style.next();
        self.style
    }

    /// Breakdown order is preserved; the result is only read.
    pub fn series(&self, result: &ImpactResult) -> ChartSeries {
        let (labels, values) = result
            .breakdown
            .iter()
            .map(|e| (e.category.to_string(), e.value))
            .unzip();
        ChartSeries {
            labels,
            values,
            style: self.style,
        }
    }
}
