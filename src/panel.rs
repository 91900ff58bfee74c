//! Wiring between one calculator panel on the page and its session.
//!
//! Each panel owns its `CalculatorSession` behind `Rc<RefCell<_>>`; the
//! button closures are the only holders, so panels never see each other.

use std::cell::RefCell;
use std::rc::Rc;

use eco_core::{Calculator, CalculatorSession, ShareStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::*;
use crate::{chart, clipboard, dom, markup};

type SharedSession<C> = Rc<RefCell<CalculatorSession<C>>>;

pub fn wire<C: Calculator + 'static>(document: &web::Document) {
    let slug = C::DOMAIN.slug();
    let session: SharedSession<C> = Rc::new(RefCell::new(CalculatorSession::new()));

    let s = session.clone();
    dom::add_click_listener(document, &calculate_button_id(slug), move || {
        if let Some(doc) = dom::window_document() {
            calculate(&doc, &s);
        }
    });

    let s = session.clone();
    dom::add_click_listener(document, &reset_button_id(slug), move || {
        if let Some(doc) = dom::window_document() {
            reset(&doc, &s);
        }
    });

    let s = session.clone();
    dom::add_click_listener(document, &share_button_id(slug), move || share(&s));

    if C::DOMAIN.has_chart() {
        dom::add_click_listener(document, CHART_TOGGLE_ID, move || {
            let mut session = session.borrow_mut();
            if let Some(style) = session.toggle_chart_style() {
                log::info!("[{}] chart style {}", slug, style.as_str());
            }
            if let Some(series) = session.chart_series() {
                chart::render(&series);
            }
        });
    }
    log::info!("[{}] panel wired", slug);
}

fn calculate<C: Calculator>(document: &web::Document, session: &RefCell<CalculatorSession<C>>) {
    let slug = C::DOMAIN.slug();
    let mut session = session.borrow_mut();
    for spec in C::FIELDS {
        let text = dom::input_value(document, &field_element_id(slug, spec.name))
            .unwrap_or_default();
        session.set_field(spec.name, &text);
    }

    let outcome = session.calculate().map(|_| ());
    match outcome {
        Ok(()) => render(document, &session),
        Err(e) => dom::alert(&format!("{}\n\n{}", C::DOMAIN.alert_message(), e)),
    }
}

fn render<C: Calculator>(document: &web::Document, session: &CalculatorSession<C>) {
    let slug = C::DOMAIN.slug();
    let Some(view) = session.view() else {
        return;
    };
    let result_id = result_element_id(slug);
    dom::set_inner_html(document, &result_id, &markup::result_html(&view));
    dom::show(document, &result_id);
    dom::hide(document, &share_fallback_id(slug));
    dom::set_text(document, &share_status_id(slug), "");

    if let Some(series) = session.chart_series() {
        dom::show(document, CHART_CANVAS_ID);
        chart::render(&series);
    }
}

fn reset<C: Calculator>(document: &web::Document, session: &RefCell<CalculatorSession<C>>) {
    let slug = C::DOMAIN.slug();
    session.borrow_mut().reset();

    for spec in C::FIELDS {
        dom::clear_input(document, &field_element_id(slug, spec.name));
    }
    let result_id = result_element_id(slug);
    dom::set_inner_html(document, &result_id, "");
    dom::hide(document, &result_id);
    dom::set_text(document, &share_status_id(slug), "");
    dom::set_text(document, &share_fallback_id(slug), "");
    dom::hide(document, &share_fallback_id(slug));
    if C::DOMAIN.has_chart() {
        dom::hide(document, CHART_CANVAS_ID);
    }
}

fn share<C: Calculator>(session: &RefCell<CalculatorSession<C>>) {
    let slug = C::DOMAIN.slug();
    let Some(message) = session.borrow().share_message() else {
        log::info!("[{}] nothing to share yet", slug);
        return;
    };

    spawn_local(async move {
        let outcome = clipboard::write_text(&message).await;
        let status = ShareStatus::settle(message, outcome);
        let Some(document) = dom::window_document() else {
            return;
        };
        dom::set_text(&document, &share_status_id(slug), status.status_text());
        if let ShareStatus::ManualCopy(text) = &status {
            let fallback_id = share_fallback_id(slug);
            dom::set_text(&document, &fallback_id, text);
            dom::show(&document, &fallback_id);
        }
    });
}
