//! GPA Calculator entry point
//!
//! Wires the page's form and keyboard events to the controller on web;
//! runs a scripted session natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Event, KeyboardEvent};

    use gpa_calculator::platform::{DomView, LocalStorage, ids};
    use gpa_calculator::{App, Settings};

    type WebApp = App<LocalStorage, DomView>;

    /// Optional JSON overrides from `<html data-gpa-settings='{...}'>`
    fn page_settings(document: &Document) -> Settings {
        document
            .document_element()
            .and_then(|el| el.get_attribute("data-gpa-settings"))
            .map(|json| Settings::from_json(&json))
            .unwrap_or_default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            web_sys::console::error_1(&"GPA Calculator: no document".into());
            return;
        };

        let settings = page_settings(&document);
        if let Some(level) = settings.log_level_filter().to_level() {
            if let Err(e) = console_log::init_with_level(level) {
                web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
            }
        }

        log::info!("GPA Calculator starting...");

        let view = DomView::attach(&document);
        let app = Rc::new(RefCell::new(App::new(LocalStorage::open(), view, settings)));

        setup_form(&document, app.clone());
        setup_keyboard(&document, app.clone());

        app.borrow_mut().start();

        log::info!(
            "GPA Calculator ready ({} assignments)",
            app.borrow().records().len()
        );
    }

    fn setup_form(document: &Document, app: Rc<RefCell<WebApp>>) {
        let Some(form) = document.get_element_by_id(ids::FORM) else {
            log::error!("Error: '{}' element not found.", ids::FORM);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            let mut app = app.borrow_mut();
            let (name, grade) = app.view().read_inputs();
            app.submit(&name, &grade);
        });
        if let Err(e) =
            form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach submit handler: {:?}", e);
        }
        closure.forget();
    }

    fn setup_keyboard(document: &Document, app: Rc<RefCell<WebApp>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow().handle_key(&event.key());
        });
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach keydown handler: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gpa_calculator::{App, MemoryStore, Settings, TextView};

    let settings = Settings::default();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    log::info!("GPA Calculator (native) starting...");
    log::info!("Native mode runs a scripted session - build for wasm32 to use the page");

    let mut app = App::new(MemoryStore::new(), TextView::new(), settings);
    app.start();

    for (name, grade) in [
        ("Quiz 1", "4.0"),
        ("Quiz 2", "3.0"),
        ("   ", "4.0"),
        ("Essay", "6"),
    ] {
        let outcome = app.submit(name, grade);
        println!("submit({:?}, {:?}) -> {:?}", name, grade, outcome);
    }
    app.handle_key("s");
    print!("\n{}", app.view().to_text());

    // Same storage, fresh session
    let storage = app.persistence().storage().clone();
    let mut reloaded = App::new(storage, TextView::new(), app.settings().clone());
    reloaded.start();
    println!("\nAfter reload:");
    print!("{}", reloaded.view().to_text());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
