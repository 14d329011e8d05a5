//! DOM overlays: the theme picker and the pause notice.
//! Presentation only; the callbacks decide what a pick means.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, window};

use crate::error::{GameError, GameResult};
use crate::theme::Theme;

pub const THEME_MENU_ID: &str = "theme-selection";
pub const PAUSE_NOTICE_ID: &str = "pause-screen";

type ClickListener = Closure<dyn FnMut(web_sys::Event)>;

thread_local! {
    // Click handlers of the menu currently in the DOM.
    static MENU_LISTENERS: RefCell<Vec<ClickListener>> = const { RefCell::new(Vec::new()) };
}

fn document() -> GameResult<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Dom("no document".into()))
}

fn js_err(context: &'static str) -> impl Fn(JsValue) -> GameError {
    move |e| GameError::from_js(context, e)
}

fn remove_by_id(doc: &Document, id: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.remove();
    }
}

/// Removes the menu and frees its click handlers. wasm-bindgen defers freeing
/// a closure that is mid-call, so this is safe from inside a click.
fn remove_menu(doc: &Document) {
    remove_by_id(doc, THEME_MENU_ID);
    MENU_LISTENERS.with(|l| l.borrow_mut().clear());
}

/// Shows one button per theme. Clicking a button removes the menu and calls
/// `on_pick`. An existing menu is replaced rather than duplicated.
pub fn show_theme_selection(on_pick: impl Fn(Theme) + Clone + 'static) -> GameResult<()> {
    let doc = document()?;
    let body = doc.body().ok_or_else(|| GameError::Dom("no body".into()))?;
    remove_menu(&doc);

    let menu = doc.create_element("div").map_err(js_err("create menu"))?;
    menu.set_id(THEME_MENU_ID);
    menu.set_attribute("style", "text-align:center; margin-top:20px;").ok();

    let title = doc.create_element("h1").map_err(js_err("create title"))?;
    title.set_text_content(Some("Choose Your Theme"));
    menu.append_child(&title).map_err(js_err("append title"))?;

    for theme in Theme::ALL {
        let button = doc.create_element("button").map_err(js_err("create button"))?;
        button.set_text_content(Some(theme.label()));
        button.set_attribute("data-theme", theme.key()).ok();
        button
            .set_attribute("style", "margin:10px; padding:10px 20px; font-size:16px;")
            .ok();

        let on_pick = on_pick.clone();
        let closure: ClickListener = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            if let Ok(doc) = document() {
                remove_by_id(&doc, THEME_MENU_ID);
            }
            on_pick(theme);
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_err("listen click"))?;
        MENU_LISTENERS.with(|l| l.borrow_mut().push(closure));
        menu.append_child(&button).map_err(js_err("append button"))?;
    }

    body.append_child(&menu).map_err(js_err("append menu"))?;
    Ok(())
}

pub fn hide_theme_selection() {
    if let Ok(doc) = document() {
        remove_menu(&doc);
    }
}

pub fn show_pause_notice() -> GameResult<()> {
    let doc = document()?;
    if doc.get_element_by_id(PAUSE_NOTICE_ID).is_some() {
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| GameError::Dom("no body".into()))?;
    let div = doc
        .create_element("div")
        .map_err(js_err("create pause notice"))?;
    div.set_id(PAUSE_NOTICE_ID);
    div.set_inner_html("Game Paused<br>Press 'P' to Resume");
    div.set_attribute("style", "position:fixed; top:50%; left:50%; transform:translate(-50%,-50%); background:rgba(0,0,0,0.8); color:white; padding:20px; text-align:center; z-index:1000;").ok();
    body.append_child(&div)
        .map_err(js_err("append pause notice"))?;
    Ok(())
}

pub fn hide_pause_notice() {
    if let Ok(doc) = document() {
        remove_by_id(&doc, PAUSE_NOTICE_ID);
    }
}
