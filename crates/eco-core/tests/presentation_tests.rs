// Share text, result views, tips and chart series.

use eco_core::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn raw(pairs: &[(&str, &str)]) -> RawInputSet {
    pairs.iter().copied().collect()
}

fn reference_carbon() -> ImpactResult {
    let input = raw(&[
        ("electricity", "500"),
        ("gas", "50"),
        ("car", "1000"),
        ("flights", "2"),
    ]);
    Carbon::calculate(&input, &mut StdRng::seed_from_u64(1)).unwrap()
}

#[test]
fn carbon_share_message() {
    assert_eq!(
        share_message(&reference_carbon()),
        "My estimated annual carbon footprint is 11536.00 kg CO2e, 288% of the global average. It would take 525 trees a year to offset it! 🌍 #EcoTech #CarbonFootprint"
    );
}

#[test]
fn electricity_share_message() {
    let result = Electricity::calculate(
        &raw(&[("bill", "1500"), ("cost_per_unit", "8")]),
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(
        share_message(&result),
        "My estimated annual electricity consumption is 2250.00 kWh, costing approximately ₹18000.00. This results in a carbon footprint of 1800.00 kg CO2e. I could save ₹1800.00 annually! ⚡ #EcoTech #EnergyConservation"
    );
}

#[test]
fn water_share_message() {
    let result = Water::calculate(
        &raw(&[("bill", "100"), ("cost_per_unit", "0.5")]),
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(
        share_message(&result),
        "My estimated annual water consumption is 2400.00 Liters, costing approximately ₹1200.00. This results in a carbon footprint of 0.07 kg CO2e. I could save ₹120.00 annually! 💧 #EcoTech #WaterConservation"
    );
}

#[test]
fn plastic_share_message() {
    let result =
        Plastic::calculate(&raw(&[("bottles", "10")]), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(
        share_message(&result),
        "My estimated annual plastic waste is 10.40 kg, which is equivalent to 520 plastic bottles in the ocean! Let's reduce our plastic footprint together. #EcoTech #PlasticWaste"
    );
}

#[test]
fn share_status_falls_back_to_manual_copy() {
    let message = "hello".to_string();
    assert_eq!(
        ShareStatus::settle(message.clone(), Ok::<(), &str>(())),
        ShareStatus::Copied
    );
    let status = ShareStatus::settle(message.clone(), Err("clipboard unavailable"));
    assert_eq!(status, ShareStatus::ManualCopy(message));
    assert_eq!(status.status_text(), "Copy the text below to share");
}

#[test]
fn carbon_view_formats_two_decimals() {
    let view = ResultView::assemble(&reference_carbon(), "Consider an electric vehicle.");
    assert_eq!(view.title, "Your Annual Carbon Footprint");
    assert_eq!(view.headline, "11536.00 kg CO₂e");
    assert_eq!(view.band, "Above average - consider reducing!");
    assert_eq!(view.metrics[0].value, "525 trees");
    assert_eq!(view.metrics[1].value, "288% of average");
    assert_eq!(view.breakdown_heading, "📊 Breakdown (kg CO₂e/year)");
    let labels: Vec<&str> = view.breakdown.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["Electricity", "Natural Gas", "Car Travel", "Flights"]);
    assert_eq!(view.breakdown[0].value, "2508.00");
    assert_eq!(view.tip, "Consider an electric vehicle.");
}

#[test]
fn utility_view_prefixes_currency() {
    let result = Electricity::calculate(
        &raw(&[("bill", "1500"), ("cost_per_unit", "8")]),
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let view = ResultView::assemble(&result, "tip");
    let value = |label: &str| {
        view.metrics
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.clone())
            .unwrap()
    };
    assert_eq!(value("💸 Annual Cost"), "₹18000.00");
    assert_eq!(value("💡 Potential Savings"), "₹1800.00");
    assert_eq!(value("🌍 Carbon Footprint"), "1800.00 kg CO₂e");
    assert_eq!(value("⚡ Daily Usage"), "6.16 kWh");
    assert_eq!(value("📋 Based On"), "Monthly bill");
}

#[test]
fn view_display_lists_every_row() {
    let view = ResultView::assemble(&reference_carbon(), "Switch to renewable energy sources.");
    let text = view.to_string();
    assert!(text.starts_with("=== Your Annual Carbon Footprint ==="));
    assert!(text.contains("11536.00 kg CO₂e"));
    assert!(text.contains("• Flights: 1000.00"));
    assert!(text.ends_with("🌱 Tip: Switch to renewable energy sources."));
}

#[test]
fn format_helpers() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(2.345), "2.35");
    assert_eq!(format_currency(12.0), "₹12.00");
}

#[test]
fn tip_selector_is_driven_by_the_injected_rng() {
    let selector = TipSelector::new(PLASTIC_TIPS);
    let mut low = StepRng::new(0, 0);
    assert_eq!(selector.pick(&mut low), PLASTIC_TIPS[0]);

    let a: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(4);
        (0..20).map(|_| selector.pick(&mut rng)).collect()
    };
    let b: Vec<_> = {
        let mut rng = StdRng::seed_from_u64(4);
        (0..20).map(|_| selector.pick(&mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn tip_selector_reaches_every_tip() {
    let selector = TipSelector::new(ELECTRICITY_TIPS);
    let mut rng = StdRng::seed_from_u64(8);
    let mut seen = vec![false; ELECTRICITY_TIPS.len()];
    for _ in 0..2000 {
        let tip = selector.pick(&mut rng);
        let index = ELECTRICITY_TIPS.iter().position(|t| *t == tip).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
#[should_panic(expected = "tip list must not be empty")]
fn tip_selector_rejects_empty_list() {
    TipSelector::new(&[]);
}

#[test]
fn every_domain_has_tips() {
    assert!(!Carbon::TIPS.is_empty());
    assert!(!Electricity::TIPS.is_empty());
    assert!(!Water::TIPS.is_empty());
    assert!(!Plastic::TIPS.is_empty());
}

#[test]
fn recycling_rate_uses_the_injected_rng() {
    let result = Plastic::compute(&PlasticInput::default(), &mut StepRng::new(0, 0));
    match result.metrics {
        Metrics::Plastic {
            recycling_rate_percent,
            ..
        } => assert_eq!(recycling_rate_percent, 20),
        ref other => panic!("unexpected metrics {:?}", other),
    }
}

#[test]
fn chart_style_cycles_through_three_styles() {
    assert_eq!(ChartStyle::default(), ChartStyle::Doughnut);
    assert_eq!(ChartStyle::Doughnut.next(), ChartStyle::Bar);
    assert_eq!(ChartStyle::Bar.next(), ChartStyle::Line);
    assert_eq!(ChartStyle::Line.next(), ChartStyle::Doughnut);

    let mut adapter = ChartSeriesAdapter::new();
    let styles: Vec<_> = (0..6).map(|_| adapter.toggle()).collect();
    assert_eq!(
        styles,
        [
            ChartStyle::Bar,
            ChartStyle::Line,
            ChartStyle::Doughnut,
            ChartStyle::Bar,
            ChartStyle::Line,
            ChartStyle::Doughnut,
        ]
    );
}

#[test]
fn chart_series_mirrors_breakdown() {
    let result = reference_carbon();
    let mut adapter = ChartSeriesAdapter::new();
    adapter.toggle();
    let series = adapter.series(&result);

    assert_eq!(series.style, ChartStyle::Bar);
    assert_eq!(series.style.as_str(), "bar");
    assert_eq!(series.len(), series.labels.len());
    assert_eq!(
        series.labels,
        ["Electricity", "Natural Gas", "Car Travel", "Flights"]
    );
    let expected: Vec<f64> = result.breakdown.iter().map(|e| e.value).collect();
    assert_eq!(series.values, expected);
    // the result itself is untouched
    assert_eq!(result, reference_carbon());
}
