//! The 2D surface around the canvas: loading indicator and description panel.
//!
//! The gallery talks to it only through [`Overlay`]. On the web the
//! [`DomOverlay`] drives the page's elements; natively [`WindowOverlay`]
//! mirrors the state into the window title and the log.

use std::sync::Arc;

use winit::window::Window;

use crate::gallery::Motif;

pub trait Overlay {
    /// Update the progress text of the loading indicator.
    fn show_progress(&mut self, loaded: usize, total: usize);

    /// Hide the loading indicator.
    fn hide_loading(&mut self);

    /// Fill the description panel with `motif` and make it visible.
    fn show_description(&mut self, motif: &Motif);

    fn hide_description(&mut self);
}

pub fn progress_text(label: &str, loaded: usize, total: usize) -> String {
    format!("{} {}/{}", label, loaded, total)
}

/// Native overlay: the window title shows progress and the selected motif.
pub struct WindowOverlay {
    window: Arc<Window>,
    title: String,
    label: String,
}

impl WindowOverlay {
    pub fn new(window: Arc<Window>, title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            window,
            title: title.into(),
            label: label.into(),
        }
    }
}

impl Overlay for WindowOverlay {
    fn show_progress(&mut self, loaded: usize, total: usize) {
        let text = progress_text(&self.label, loaded, total);
        log::info!("{}", text);
        self.window.set_title(&format!("{} | {}", self.title, text));
    }

    fn hide_loading(&mut self) {
        self.window.set_title(&self.title);
    }

    fn show_description(&mut self, motif: &Motif) {
        log::info!("{} ({}): {}", motif.name, motif.color, motif.description);
        self.window.set_title(&format!("{} | {}", self.title, motif.name));
    }

    fn hide_description(&mut self) {
        self.window.set_title(&self.title);
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomOverlay;

#[cfg(target_arch = "wasm32")]
mod dom {
    use anyhow::anyhow;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement};

    use super::{Overlay, progress_text};
    use crate::gallery::Motif;

    const LOADING_ID: &str = "loading";
    const PANEL_ID: &str = "description-panel";
    const NAME_ID: &str = "motif-name";
    const DESCRIPTION_ID: &str = "motif-description";
    const COLOUR_ID: &str = "color-box";

    const HIDDEN_CLASS: &str = "hidden";
    const VISIBLE_CLASS: &str = "visible";

    /// Browser overlay driving the page elements by id.
    pub struct DomOverlay {
        loading: Element,
        panel: Element,
        name: Element,
        description: Element,
        colour_box: HtmlElement,
        label: String,
    }

    fn element(document: &Document, id: &str) -> anyhow::Result<Element> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow!("Element #{} not found", id))
    }

    fn log_js_error(action: &str, err: JsValue) {
        log::error!("Could not {}: {:?}", action, err);
    }

    impl DomOverlay {
        pub fn from_document(label: impl Into<String>) -> anyhow::Result<Self> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| anyhow!("No document available"))?;
            let colour_box = element(&document, COLOUR_ID)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| anyhow!("#{} is not an HTML element", COLOUR_ID))?;
            Ok(Self {
                loading: element(&document, LOADING_ID)?,
                panel: element(&document, PANEL_ID)?,
                name: element(&document, NAME_ID)?,
                description: element(&document, DESCRIPTION_ID)?,
                colour_box,
                label: label.into(),
            })
        }
    }

    impl Overlay for DomOverlay {
        fn show_progress(&mut self, loaded: usize, total: usize) {
            let text = progress_text(&self.label, loaded, total);
            self.loading.set_text_content(Some(&text));
        }

        fn hide_loading(&mut self) {
            if let Err(e) = self.loading.class_list().add_1(HIDDEN_CLASS) {
                log_js_error("hide the loading indicator", e);
            }
        }

        fn show_description(&mut self, motif: &Motif) {
            self.name.set_text_content(Some(&motif.name));
            self.description.set_text_content(Some(&motif.description));
            if let Err(e) = self
                .colour_box
                .style()
                .set_property("background-color", &motif.color)
            {
                log_js_error("set the motif colour", e);
            }
            if let Err(e) = self.panel.class_list().add_1(VISIBLE_CLASS) {
                log_js_error("show the description panel", e);
            }
        }

        fn hide_description(&mut self) {
            if let Err(e) = self.panel.class_list().remove_1(VISIBLE_CLASS) {
                log_js_error("hide the description panel", e);
            }
        }
    }
}
