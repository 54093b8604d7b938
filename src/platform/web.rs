//! Browser bindings: LocalStorage slot and DOM presentation

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Storage};

use super::ids;
use crate::persistence::{KeyValueStore, StorageError};
use crate::view::{ListView, PresentationSink, PresentationUnavailable};

/// `window.localStorage` as a [`KeyValueStore`]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, assignments will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_storage_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_storage_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_storage_error)
    }
}

/// Describe a thrown storage exception (e.g. QuotaExceededError)
fn js_storage_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => StorageError::Backend(format!(
            "{}: {}",
            String::from(e.name()),
            String::from(e.message())
        )),
        None => StorageError::Backend(format!("{:?}", err)),
    }
}

/// The page's named elements as a [`PresentationSink`]
///
/// Elements missing from the page stay `None`; drawing to them reports
/// [`PresentationUnavailable`].
pub struct DomView {
    list: Option<Element>,
    gpa: Option<Element>,
    message: Option<Element>,
    name_input: Option<HtmlInputElement>,
    grade_input: Option<HtmlInputElement>,
}

impl DomView {
    pub fn attach(document: &Document) -> Self {
        let view = Self {
            list: document.get_element_by_id(ids::LIST),
            gpa: document.get_element_by_id(ids::GPA_VALUE),
            message: document.get_element_by_id(ids::VALIDATION_MESSAGE),
            name_input: input(document, ids::NAME_INPUT),
            grade_input: input(document, ids::GRADE_INPUT),
        };
        if view.name_input.is_none() || view.grade_input.is_none() {
            log::error!("Assignment inputs not found, submissions will be empty");
        }
        view
    }

    /// Current (name, grade) field text
    pub fn read_inputs(&self) -> (String, String) {
        let value = |el: &Option<HtmlInputElement>| {
            el.as_ref().map(|e| e.value()).unwrap_or_default()
        };
        (value(&self.name_input), value(&self.grade_input))
    }
}

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

fn append_child(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(el)
}

fn fill_list(document: &Document, container: &Element, list: &ListView) -> Result<(), JsValue> {
    match list {
        ListView::Placeholder(text) => {
            append_child(document, container, "p", "no-assignments", text)?;
        }
        ListView::Items(items) => {
            for item in items {
                let row = append_child(document, container, "div", "assignment-item", "")?;
                append_child(document, &row, "span", "assignment-name", &item.name)?;
                append_child(
                    document,
                    &row,
                    "span",
                    "assignment-grade",
                    &format!(": {}", item.grade),
                )?;
            }
        }
    }
    Ok(())
}

impl PresentationSink for DomView {
    fn show_records(&mut self, list: &ListView) -> Result<(), PresentationUnavailable> {
        let unavailable = PresentationUnavailable { target: ids::LIST };
        let container = self.list.as_ref().ok_or(unavailable.clone())?;
        let document = container.owner_document().ok_or(unavailable.clone())?;

        container.set_inner_html("");
        fill_list(&document, container, list).map_err(|e| {
            log::error!("Failed to build assignment list: {:?}", e);
            unavailable
        })
    }

    fn show_gpa(&mut self, text: &str) -> Result<(), PresentationUnavailable> {
        let el = self.gpa.as_ref().ok_or(PresentationUnavailable {
            target: ids::GPA_VALUE,
        })?;
        el.set_text_content(Some(text));
        Ok(())
    }

    fn show_validation_message(&mut self, text: &str) {
        if let Some(el) = &self.message {
            el.set_text_content(Some(text));
        }
    }

    fn reset_inputs(&mut self) {
        if let Some(el) = &self.grade_input {
            el.set_value("");
        }
        if let Some(el) = &self.name_input {
            el.set_value("");
            let _ = el.focus();
        }
    }
}
