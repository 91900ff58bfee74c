use anyhow::anyhow;
use eco_core::ChartSeries;
use js_sys::{Array, Float64Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{CHART_CANVAS_ID, CHART_RENDER_FN};

/// Hand a series to the page's charting code. A missing or failing
/// collaborator only costs the chart.
pub fn render(series: &ChartSeries) {
    if let Err(e) = call_renderer(series) {
        log::warn!("[chart] {} failed: {:?}", CHART_RENDER_FN, e);
    }
}

fn call_renderer(series: &ChartSeries) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let renderer = Reflect::get(&window, &JsValue::from_str(CHART_RENDER_FN))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<Function>()
        .map_err(|_| anyhow!("window.{} is not defined", CHART_RENDER_FN))?;

    let labels: Array = series
        .labels
        .iter()
        .map(|label| JsValue::from_str(label))
        .collect();
    let values = Float64Array::from(series.values.as_slice());
    let args = Array::of4(
        &JsValue::from_str(CHART_CANVAS_ID),
        &labels,
        &values,
        &JsValue::from_str(series.style.as_str()),
    );
    renderer
        .apply(&window, &args)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
