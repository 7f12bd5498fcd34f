//! Copy an element's text to the system clipboard
//!
//! The handler selects the element's contents, asks the host to copy the
//! current selection, then clears the selection again. The host capabilities
//! sit behind small traits so the sequence can run against a fake in tests
//! and against the real DOM through `BrowserHost`.

pub mod browser;
pub mod errors;

pub use browser::copy_target;
pub use errors::{CopyError, CopyResult};

/// Outcome of a copy that reached the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    /// Host reported the selection was copied
    Copied,
    /// Host declined the copy (permissions, unsupported command)
    Refused,
}

/// Document element lookup by id
pub trait ElementLookup {
    type Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Access to the host's single global selection
pub trait SelectionService<N> {
    /// Replace the current selection with a range covering all of `node`'s contents
    fn set_range(&self, node: &N) -> CopyResult<()>;

    /// Remove every range from the selection
    fn clear(&self);
}

/// Host copy command acting on the current selection
pub trait CopyCommand {
    /// Returns `Ok(false)` when the host refuses the copy
    fn copy_selection(&self) -> CopyResult<bool>;
}

/// Select the contents of `target_id`, copy them, then clear the selection.
///
/// No copy is attempted when the element is missing. Once a selection has been
/// touched it is always cleared before returning.
pub fn copy_element_contents<L, S, C>(
    lookup: &L,
    selection: &S,
    command: &C,
    target_id: &str,
) -> CopyResult<CopyStatus>
where
    L: ElementLookup,
    S: SelectionService<L::Node>,
    C: CopyCommand,
{
    let node = match lookup.element_by_id(target_id) {
        Some(node) => node,
        None => {
            let err = CopyError::ElementNotFound { id: target_id.to_string() };
            log::error!("{}", err);
            return Err(err);
        }
    };

    if let Err(e) = selection.set_range(&node) {
        selection.clear();
        log::error!("{}", e);
        return Err(e);
    }

    let result = command.copy_selection();
    selection.clear();

    match result {
        Ok(true) => {
            log::info!("Copied #{} to clipboard", target_id);
            Ok(CopyStatus::Copied)
        }
        Ok(false) => {
            log::warn!("Browser refused to copy #{}", target_id);
            Ok(CopyStatus::Refused)
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e)
        }
    }
}
