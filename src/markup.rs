// HTML for a rendered result panel. Kept free of `web_sys` so it can be
// exercised on the host; the DOM side only assigns the string to `innerHTML`.

use eco_core::{ResultView, ViewRow};

/// Escape text for inclusion in element content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn rows_html(rows: &[ViewRow], class: &str) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "<li class='{}'><span class='label'>{}</span><span class='value'>{}</span></li>",
                class,
                escape(row.label),
                escape(&row.value)
            )
        })
        .collect()
}

pub fn result_html(view: &ResultView) -> String {
    format!(
        "<h3 class='result-title'>{}</h3>\
         <div class='result-total'>{}</div>\
         <div class='result-band'>{}</div>\
         <ul class='result-metrics'>{}</ul>\
         <h4 class='result-breakdown-heading'>{}</h4>\
         <ul class='result-breakdown'>{}</ul>\
         <div class='result-tip'>🌱 Tip: {}</div>",
        escape(view.title),
        escape(&view.headline),
        escape(view.band),
        rows_html(&view.metrics, "metric"),
        escape(&view.breakdown_heading),
        rows_html(&view.breakdown, "breakdown-item"),
        escape(&view.tip),
    )
}
