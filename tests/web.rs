// Browser tests for the DOM overlays. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use theme_runner::assets::ThemeImages;
use theme_runner::overlay::{self, PAUSE_NOTICE_ID, THEME_MENU_ID};
use theme_runner::{AssetRole, Theme};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn theme_menu_has_one_button_per_theme_and_is_not_duplicated() {
    overlay::show_theme_selection(|_| {}).unwrap();
    overlay::show_theme_selection(|_| {}).unwrap();
    let menu = document().get_element_by_id(THEME_MENU_ID).unwrap();
    assert_eq!(menu.get_elements_by_tag_name("button").length(), Theme::ALL.len() as u32);
    // Removing by id once must leave no second copy behind.
    overlay::hide_theme_selection();
    assert!(document().get_element_by_id(THEME_MENU_ID).is_none());
}

#[wasm_bindgen_test]
fn clicking_a_theme_removes_menu_and_reports_choice() {
    let picked = Rc::new(Cell::new(None));
    let sink = picked.clone();
    overlay::show_theme_selection(move |t| sink.set(Some(t))).unwrap();
    let button = document()
        .query_selector("[data-theme=ocean]")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    button.click();
    assert_eq!(picked.get(), Some(Theme::Ocean));
    assert!(document().get_element_by_id(THEME_MENU_ID).is_none());
}

#[wasm_bindgen_test]
fn pause_notice_shows_once_and_hides() {
    overlay::show_pause_notice().unwrap();
    overlay::show_pause_notice().unwrap();
    assert!(document().get_element_by_id(PAUSE_NOTICE_ID).is_some());
    overlay::hide_pause_notice();
    assert!(document().get_element_by_id(PAUSE_NOTICE_ID).is_none());
}

#[wasm_bindgen_test]
fn theme_images_load_without_cors_mode() {
    // Remote backgrounds must load from hosts that send no CORS headers.
    let images = ThemeImages::load(Theme::Space).unwrap();
    assert!(images.background.element.src().starts_with("https://"));
    for role in [AssetRole::Player, AssetRole::Obstacle, AssetRole::Background] {
        assert_eq!(images.get(role).element.cross_origin(), None);
    }
}
