#![cfg(target_arch = "wasm32")]
//! Browser front-end: four calculator panels driven by `eco-core` sessions.

use eco_core::{Carbon, Electricity, Plastic, Water};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod chart;
mod clipboard;
mod constants;
mod dom;
mod markup;
mod panel;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("eco-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    panel::wire::<Carbon>(&document);
    panel::wire::<Electricity>(&document);
    panel::wire::<Water>(&document);
    panel::wire::<Plastic>(&document);
    Ok(())
}
