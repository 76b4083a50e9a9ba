//! The page's single `Studio` and the entry points components call.
//!
//! The studio is `!Send` (it owns `RefCell` state and awaits JS promises),
//! so it lives in a thread-local rather than a Leptos context. Components
//! capture only the `UiState` signal and call the free functions below;
//! async actions run on `spawn_local` and may overlap, with the studio's
//! request tokens deciding which result lands.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use flownook::Studio;
use flownook::studio::Completion;
use leptos::prelude::*;

use super::BrowserHost;
use crate::net::api::HttpService;
use crate::state::ui::UiState;
use crate::util::page_config;

type PageStudio = Studio<BrowserHost>;

thread_local! {
    static STUDIO: RefCell<Option<Rc<PageStudio>>> = const { RefCell::new(None) };
}

fn current() -> Option<Rc<PageStudio>> {
    STUDIO.with(|slot| slot.borrow().clone())
}

fn spawn(task: impl Future<Output = ()> + 'static) {
    leptos::task::spawn_local(task);
}

/// Create the studio for this page (once) and start loading examples.
pub fn install(ui: RwSignal<UiState>) {
    if current().is_some() {
        return;
    }
    let config = page_config::read();
    let host = BrowserHost::new(HttpService::from_config(&config), ui);
    let studio = match Studio::new(host, config) {
        Ok(studio) => Rc::new(studio),
        Err(e) => {
            leptos::logging::error!("studio configuration rejected: {e}");
            return;
        }
    };
    sync_chrome(&studio);
    STUDIO.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&studio)));

    spawn(async move {
        let examples = studio.load_examples().await;
        ui.update(|u| u.examples = examples);
    });
}

/// Copy derived studio values that have no dedicated surface call.
fn sync_chrome(studio: &PageStudio) {
    let zoom_percent = studio.zoom_percent();
    let (zoom_in_enabled, zoom_out_enabled) = (studio.can_zoom_in(), studio.can_zoom_out());
    let quality = studio.download_quality();
    studio.host().ui().update(|u| {
        u.zoom_percent = zoom_percent;
        u.zoom_in_enabled = zoom_in_enabled;
        u.zoom_out_enabled = zoom_out_enabled;
        u.quality = quality.pixels();
        u.quality_label = quality.label();
    });
}

fn log_completion(action: &str, completion: Completion) {
    if completion == Completion::Superseded {
        leptos::logging::log!("{action}: superseded by a newer action");
    }
}

pub fn generate(text: String) {
    let Some(studio) = current() else {
        return;
    };
    spawn(async move {
        match studio.generate(&text).await {
            Ok(completion) => log_completion("generate", completion),
            Err(e) => leptos::logging::warn!("generate: {e}"),
        }
        sync_chrome(&studio);
    });
}

pub fn reset() {
    if let Some(studio) = current() {
        studio.reset();
        sync_chrome(&studio);
    }
}

pub fn zoom_in() {
    if let Some(studio) = current() {
        studio.zoom_in();
        sync_chrome(&studio);
    }
}

pub fn zoom_out() {
    if let Some(studio) = current() {
        studio.zoom_out();
        sync_chrome(&studio);
    }
}

pub fn toggle_theme() {
    let Some(studio) = current() else {
        return;
    };
    spawn(async move {
        let mode = studio.toggle_theme().await;
        leptos::logging::log!("theme: {mode}");
        sync_chrome(&studio);
    });
}

pub fn set_download_quality(pixels: u32) {
    let Some(studio) = current() else {
        return;
    };
    if let Err(e) = studio.set_download_quality(pixels) {
        leptos::logging::warn!("download quality: {e}");
    }
    sync_chrome(&studio);
    studio.host().ui().update(|u| u.panels.quality_menu_open = false);
}

pub fn download() {
    let Some(studio) = current() else {
        return;
    };
    spawn(async move {
        match studio.export().await {
            Ok(completion) => log_completion("download", completion),
            Err(e) => leptos::logging::warn!("download: {e}"),
        }
    });
}

/// Description text for example `index`, closing the examples panel.
pub fn pick_example(index: usize) -> Option<String> {
    let studio = current()?;
    studio.host().ui().update(|u| u.panels.examples_open = false);
    studio.example_description(index)
}

/// Offered export widths, for the quality menu.
pub fn quality_options() -> Vec<(u32, String)> {
    let options = match current() {
        Some(studio) => studio.quality_options(),
        None => flownook::StudioConfig::default().qualities(),
    };
    options.into_iter().map(|q| (q.pixels(), q.label())).collect()
}
