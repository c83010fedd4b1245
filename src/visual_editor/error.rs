use thiserror::Error;

use super::model::{ElementId, ElementKind};

/// Why the store refused an action. A refused action leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("element {0} not found")]
    NotFound(ElementId),

    #[error("element id {0} is already in use")]
    DuplicateId(ElementId),

    #[error("element {id} is a {expected} and cannot take {found} properties")]
    KindMismatch {
        id: ElementId,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("element {0} is not a container")]
    InvalidParent(ElementId),

    #[error("cannot place {child} inside its own descendant {parent}")]
    Cycle { child: ElementId, parent: ElementId },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("no element is selected")]
    NothingSelected,

    #[error("clipboard is empty")]
    EmptyClipboard,
}
