// Host-side tests for element ids shared with the page markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use eco_core::{Calculator, Carbon, Domain, Electricity, Plastic, Water};

#[test]
fn ids_follow_the_domain_slug() {
    assert_eq!(field_element_id("water", "shower_minutes"), "water-shower_minutes");
    assert_eq!(calculate_button_id("plastic"), "plastic-calculate");
    assert_eq!(reset_button_id("carbon"), "carbon-reset");
    assert_eq!(share_button_id("electricity"), "electricity-share");
    assert_eq!(result_element_id("carbon"), "carbon-result");
    assert_eq!(share_status_id("water"), "water-share-status");
    assert_eq!(share_fallback_id("water"), "water-share-fallback");
}

#[test]
fn chart_ids_belong_to_the_carbon_panel() {
    let slug = Domain::Carbon.slug();
    assert!(CHART_CANVAS_ID.starts_with(slug));
    assert!(CHART_TOGGLE_ID.starts_with(slug));
    assert_eq!(CHART_RENDER_FN, "renderImpactChart");
}

fn field_ids<C: Calculator>() -> Vec<String> {
    C::FIELDS
        .iter()
        .map(|spec| field_element_id(C::DOMAIN.slug(), spec.name))
        .collect()
}

#[test]
fn field_ids_are_unique_across_the_page() {
    let mut ids = Vec::new();
    ids.extend(field_ids::<Carbon>());
    ids.extend(field_ids::<Electricity>());
    ids.extend(field_ids::<Water>());
    ids.extend(field_ids::<Plastic>());
    for domain in Domain::ALL {
        let slug = domain.slug();
        ids.push(calculate_button_id(slug));
        ids.push(reset_button_id(slug));
        ids.push(share_button_id(slug));
        ids.push(result_element_id(slug));
        ids.push(share_status_id(slug));
        ids.push(share_fallback_id(slug));
    }
    ids.push(CHART_CANVAS_ID.to_string());
    ids.push(CHART_TOGGLE_ID.to_string());

    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate element id on the page");
}
