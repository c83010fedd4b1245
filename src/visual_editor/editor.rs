use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::config::{HISTORY_LIMIT, PASTE_OFFSET};

use super::error::StoreError;
use super::model::{ElementId, ElementRecord, PropField};
use super::property_panel::Geometry;
use super::state::{Action, BuilderState};

#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    Editor,
    Preview,
}

/// The field a run of keystrokes goes into. Consecutive edits with the same key
/// share one undo step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Prop(ElementId, PropField),
    Geometry(ElementId, Geometry),
}

#[derive(Clone, Debug)]
pub struct Editor {
    present: BuilderState,
    past: Vec<BuilderState>,
    future: Vec<BuilderState>,
    clipboard: Option<ElementRecord>,
    last_edit: Option<EditKey>,
    limit: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(BuilderState::default(), HISTORY_LIMIT)
    }
}

impl Editor {
    pub fn new(initial: BuilderState, limit: usize) -> Self {
        Self {
            present: initial,
            past: Vec::new(),
            future: Vec::new(),
            clipboard: None,
            last_edit: None,
            limit,
        }
    }

    pub fn state(&self) -> &BuilderState {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        self.commit([action], None)
    }

    /// Applies `actions` in order as a single undo step. Nothing changes if any is rejected.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Result<(), StoreError> {
        self.commit(actions, None)
    }

    /// Like `dispatch`, but folds into the previous step when it edited the same field.
    pub fn dispatch_edit(&mut self, action: Action, key: EditKey) -> Result<(), StoreError> {
        self.commit([action], Some(key))
    }

    fn commit(&mut self, actions: impl IntoIterator<Item = Action>, key: Option<EditKey>) -> Result<(), StoreError> {
        let mut undoable = false;
        let mut next = self.present.clone();
        for action in actions {
            undoable |= action.is_undoable();
            next = next.reduce(action)?;
        }
        if next == self.present {
            return Ok(());
        }
        let previous = std::mem::replace(&mut self.present, next);
        if undoable {
            let continues_run = key.is_some() && key == self.last_edit && !self.past.is_empty();
            if !continues_run {
                self.past.push(previous);
                if self.past.len() > self.limit {
                    self.past.remove(0);
                }
            }
            self.future.clear();
            self.last_edit = key;
        }
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), StoreError> {
        let previous = self.past.pop().ok_or(StoreError::NothingToUndo)?;
        self.last_edit = None;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), StoreError> {
        let next = self.future.pop().ok_or(StoreError::NothingToRedo)?;
        self.last_edit = None;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        Ok(())
    }

    pub fn copy_selected(&mut self) -> Result<ElementId, StoreError> {
        let record = self.present.selected().ok_or(StoreError::NothingSelected)?;
        let id = record.id;
        self.clipboard = Some(record.clone());
        Ok(id)
    }

    /// Pastes the clipboard with a fresh id, nudged so it doesn't cover the original.
    /// The clipboard shifts along with it, so repeated pastes cascade.
    pub fn paste(&mut self) -> Result<ElementId, StoreError> {
        let mut record = self.clipboard.clone().ok_or(StoreError::EmptyClipboard)?;
        record.id = ElementId::new();
        record.position = record.position.offset(PASTE_OFFSET);
        let id = record.id;
        self.dispatch(Action::Paste(record.clone()))?;
        self.clipboard = Some(record);
        Ok(id)
    }
}

pub static EDITOR: GlobalSignal<Editor> = Signal::global(Editor::default);
pub static EDITOR_MODE: GlobalSignal<EditorMode> = Signal::global(|| EditorMode::Editor);

pub fn dispatch(action: Action) {
    debug!(?action, "dispatch");
    if let Err(err) = EDITOR.write().dispatch(action) {
        warn!(%err, "action rejected");
    }
}

pub fn dispatch_all(actions: Vec<Action>) {
    debug!(?actions, "dispatch all");
    if let Err(err) = EDITOR.write().dispatch_all(actions) {
        warn!(%err, "actions rejected");
    }
}

pub fn dispatch_edit(action: Action, key: EditKey) {
    debug!(?action, ?key, "edit");
    if let Err(err) = EDITOR.write().dispatch_edit(action, key) {
        warn!(%err, "edit rejected");
    }
}

pub fn select(id: Option<ElementId>) {
    dispatch(Action::Select(id));
}

pub fn delete_selected() {
    let selected = EDITOR.read().state().selected_id();
    if let Some(id) = selected {
        dispatch(Action::Delete(id));
    }
}

pub fn undo() {
    match EDITOR.write().undo() {
        Ok(()) => info!("undo"),
        Err(err) => debug!(%err, "undo skipped"),
    }
}

pub fn redo() {
    match EDITOR.write().redo() {
        Ok(()) => info!("redo"),
        Err(err) => debug!(%err, "redo skipped"),
    }
}

pub fn copy() {
    match EDITOR.write().copy_selected() {
        Ok(id) => info!(%id, "copied"),
        Err(err) => debug!(%err, "copy skipped"),
    }
}

pub fn paste() {
    match EDITOR.write().paste() {
        Ok(id) => info!(%id, "pasted"),
        Err(err) => debug!(%err, "paste skipped"),
    }
}

pub fn set_mode(mode: EditorMode) {
    *EDITOR_MODE.write() = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual_editor::model::{ElementKind, Point};

    fn editor() -> Editor {
        Editor::new(BuilderState::default(), 3)
    }

    #[test]
    fn undo_and_redo_walk_history() {
        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Text, Point::default())).unwrap();
        let id = editor.state().selected_id().unwrap();
        editor.dispatch(Action::Move { id, position: Point::new(9.0, 9.0) }).unwrap();

        editor.undo().unwrap();
        assert_eq!(editor.state().get(id).unwrap().position, Point::default());
        editor.undo().unwrap();
        assert!(editor.state().is_empty());
        assert_eq!(editor.undo(), Err(StoreError::NothingToUndo));

        editor.redo().unwrap();
        editor.redo().unwrap();
        assert_eq!(editor.state().get(id).unwrap().position, Point::new(9.0, 9.0));
        assert_eq!(editor.redo(), Err(StoreError::NothingToRedo));
    }

    #[test]
    fn new_action_clears_redo() {
        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Text, Point::default())).unwrap();
        editor.undo().unwrap();
        assert!(editor.can_redo());
        editor.dispatch(Action::add(ElementKind::Image, Point::default())).unwrap();
        assert!(!editor.can_redo());
    }

    #[test]
    fn selection_is_not_an_undo_step() {
        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Text, Point::default())).unwrap();
        editor.dispatch(Action::Select(None)).unwrap();
        editor.undo().unwrap();
        assert!(editor.state().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn history_is_bounded() {
        let mut editor = editor();
        for _ in 0..5 {
            editor.dispatch(Action::add(ElementKind::Button, Point::default())).unwrap();
        }
        let mut undos = 0;
        while editor.undo().is_ok() {
            undos += 1;
        }
        assert_eq!(undos, 3);
        assert_eq!(editor.state().len(), 2);
    }

    #[test]
    fn rejected_action_keeps_state_and_history() {
        let mut editor = editor();
        let ghost = ElementId::new();
        assert_eq!(
            editor.dispatch(Action::Move { id: ghost, position: Point::default() }),
            Err(StoreError::NotFound(ghost))
        );
        assert!(!editor.can_undo());
    }

    #[test]
    fn paste_cascades_copies() {
        let mut editor = editor();
        assert_eq!(editor.paste(), Err(StoreError::EmptyClipboard));
        editor.dispatch(Action::add(ElementKind::Button, Point::new(10.0, 10.0))).unwrap();
        let original = editor.copy_selected().unwrap();

        let first = editor.paste().unwrap();
        let second = editor.paste().unwrap();
        assert_ne!(first, original);
        assert_ne!(first, second);
        assert_eq!(editor.state().get(first).unwrap().position, Point::new(30.0, 30.0));
        assert_eq!(editor.state().get(second).unwrap().position, Point::new(50.0, 50.0));
        assert_eq!(editor.state().selected_id(), Some(second));
        assert_eq!(editor.state().len(), 3);
    }

    #[test]
    fn drop_into_container_undoes_in_one_step() {
        use crate::visual_editor::drag::{drop_actions, DragPayload};

        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Container, Point::default())).unwrap();
        let container = editor.state().selected_id().unwrap();
        editor.dispatch(Action::add(ElementKind::Text, Point::new(400.0, 400.0))).unwrap();
        let text = editor.state().selected_id().unwrap();
        let before = editor.state().clone();

        let payload = DragPayload::Existing { id: text, grab: Point::default() };
        let actions = drop_actions(editor.state(), payload, Point::new(30.0, 30.0));
        assert_eq!(actions.len(), 2);
        editor.dispatch_all(actions).unwrap();
        let dropped = editor.state().get(text).unwrap();
        assert_eq!(dropped.parent_id, Some(container));
        assert_eq!(dropped.position, Point::new(30.0, 30.0));

        editor.undo().unwrap();
        assert_eq!(editor.state(), &before);
        editor.redo().unwrap();
        assert_eq!(editor.state().get(text).unwrap().parent_id, Some(container));
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Text, Point::default())).unwrap();
        let id = editor.state().selected_id().unwrap();
        let before = editor.state().clone();
        let ghost = ElementId::new();

        let result = editor.dispatch_all([
            Action::Move { id, position: Point::new(5.0, 5.0) },
            Action::Move { id: ghost, position: Point::default() },
        ]);
        assert_eq!(result, Err(StoreError::NotFound(ghost)));
        assert_eq!(editor.state(), &before);
        editor.undo().unwrap();
        assert!(editor.state().is_empty());
    }

    #[test]
    fn typing_into_one_field_is_one_undo_step() {
        use crate::visual_editor::state::ElementPatch;

        let mut editor = editor();
        editor.dispatch(Action::add(ElementKind::Text, Point::default())).unwrap();
        let id = editor.state().selected_id().unwrap();
        let typed = |editor: &mut Editor, content: &str, field: PropField| {
            let mut props = editor.state().get(id).unwrap().props.clone();
            props.set(field, content);
            let action = Action::Update { id, patch: ElementPatch::props(props) };
            editor.dispatch_edit(action, EditKey::Prop(id, field)).unwrap();
        };

        typed(&mut editor, "H", PropField::Content);
        typed(&mut editor, "Hi", PropField::Content);
        typed(&mut editor, "#ff0000", PropField::Color);
        typed(&mut editor, "#ff0000aa", PropField::Color);

        editor.undo().unwrap();
        let record = editor.state().get(id).unwrap();
        assert_eq!(record.props.get(PropField::Content), Some("Hi"));
        assert_eq!(record.props.get(PropField::Color), Some("#000000"));

        editor.undo().unwrap();
        assert_eq!(editor.state().get(id).unwrap().props.get(PropField::Content), Some("Sample Text"));

        // After an undo, the next keystroke starts a fresh step.
        typed(&mut editor, "Hey", PropField::Content);
        typed(&mut editor, "Hey!", PropField::Content);
        editor.undo().unwrap();
        assert_eq!(editor.state().get(id).unwrap().props.get(PropField::Content), Some("Sample Text"));
        assert_eq!(editor.state().len(), 1);
    }

    #[test]
    fn copy_without_selection_fails() {
        let mut editor = editor();
        assert_eq!(editor.copy_selected(), Err(StoreError::NothingSelected));
        assert!(!editor.has_clipboard());
    }
}
