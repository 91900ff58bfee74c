/// Element ids and JS collaborator names shared by the page and the wasm side.
///
/// Every calculator panel follows the same naming scheme keyed on the domain
/// slug, so the page markup only needs to repeat the pattern four times.

pub const CHART_CANVAS_ID: &str = "carbon-chart";
pub const CHART_TOGGLE_ID: &str = "carbon-chart-toggle";

// window.renderImpactChart(canvasId, labels, values, style)
pub const CHART_RENDER_FN: &str = "renderImpactChart";

pub const HIDDEN_CLASS: &str = "hidden";

#[inline]
pub fn field_element_id(slug: &str, field: &str) -> String {
    format!("{}-{}", slug, field)
}

#[inline]
pub fn calculate_button_id(slug: &str) -> String {
    format!("{}-calculate", slug)
}

#[inline]
pub fn reset_button_id(slug: &str) -> String {
    format!("{}-reset", slug)
}

#[inline]
pub fn share_button_id(slug: &str) -> String {
    format!("{}-share", slug)
}

/// Container the result panel is rendered into.
#[inline]
pub fn result_element_id(slug: &str) -> String {
    format!("{}-result", slug)
}

#[inline]
pub fn share_status_id(slug: &str) -> String {
    format!("{}-share-status", slug)
}

#[inline]
pub fn share_fallback_id(slug: &str) -> String {
    format!("{}-share-fallback", slug)
}
