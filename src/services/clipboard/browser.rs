// DOM-backed clipboard host

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, Selection, Window};

use super::errors::{js_error_message, CopyError, CopyResult};
use super::{copy_element_contents, CopyCommand, CopyStatus, ElementLookup, SelectionService};

/// The browser window and document behind the clipboard traits
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> CopyResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| CopyError::HostUnavailable("No window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| CopyError::HostUnavailable("No document".to_string()))?;
        Ok(Self { window, document })
    }

    fn selection(&self) -> CopyResult<Selection> {
        self.window
            .get_selection()
            .map_err(|e| CopyError::selection("getSelection", e))?
            .ok_or_else(|| CopyError::HostUnavailable("No selection object".to_string()))
    }
}

impl ElementLookup for BrowserHost {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl SelectionService<Element> for BrowserHost {
    fn set_range(&self, node: &Element) -> CopyResult<()> {
        let range = self
            .document
            .create_range()
            .map_err(|e| CopyError::selection("createRange", e))?;
        range
            .select_node_contents(node)
            .map_err(|e| CopyError::selection("selectNodeContents", e))?;

        let selection = self.selection()?;
        selection
            .remove_all_ranges()
            .map_err(|e| CopyError::selection("removeAllRanges", e))?;
        selection
            .add_range(&range)
            .map_err(|e| CopyError::selection("addRange", e))
    }

    fn clear(&self) {
        match self.window.get_selection() {
            Ok(Some(selection)) => {
                if let Err(e) = selection.remove_all_ranges() {
                    log::warn!("Failed to clear selection: {}", js_error_message(&e));
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Failed to get selection: {}", js_error_message(&e)),
        }
    }
}

impl CopyCommand for BrowserHost {
    fn copy_selection(&self) -> CopyResult<bool> {
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| CopyError::HostUnavailable("Document is not an HTML document".to_string()))?;
        html_document
            .exec_command("copy")
            .map_err(|e| CopyError::command("execCommand", e))
    }
}

/// Copy the text of the element with `target_id` using the live DOM
pub fn copy_target(target_id: &str) -> CopyResult<CopyStatus> {
    let host = BrowserHost::new().map_err(|e| {
        log::error!("{}", e);
        e
    })?;
    copy_element_contents(&host, &host, &host, target_id)
}
