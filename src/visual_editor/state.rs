use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::config::{CANVAS_DEFAULT, CANVAS_MAX, CANVAS_MIN};

use super::error::StoreError;
use super::model::{ElementId, ElementKind, ElementProps, ElementRecord, Point, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Add {
        id: ElementId,
        kind: ElementKind,
        position: Point,
        parent: Option<ElementId>,
    },
    Update {
        id: ElementId,
        patch: ElementPatch,
    },
    Delete(ElementId),
    Select(Option<ElementId>),
    Move {
        id: ElementId,
        position: Point,
    },
    Reparent {
        id: ElementId,
        parent: Option<ElementId>,
    },
    /// Inserts a detached copy of a record at the root and selects it.
    Paste(ElementRecord),
}

impl Action {
    /// Add with a freshly generated id.
    pub fn add(kind: ElementKind, position: Point) -> Self {
        Action::Add {
            id: ElementId::new(),
            kind,
            position,
            parent: None,
        }
    }

    pub fn add_into(kind: ElementKind, position: Point, parent: ElementId) -> Self {
        Action::Add {
            id: ElementId::new(),
            kind,
            position,
            parent: Some(parent),
        }
    }

    /// Selection changes are not worth an undo step.
    pub fn is_undoable(&self) -> bool {
        !matches!(self, Action::Select(_))
    }
}

/// Fields to overwrite on a record. `None` leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub props: Option<ElementProps>,
}

impl ElementPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn props(props: ElementProps) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuilderState {
    elements: HashMap<ElementId, Rc<ElementRecord>>,
    /// Paint order, oldest first. Holds exactly the keys of `elements`.
    order: Vec<ElementId>,
    selected_id: Option<ElementId>,
    canvas_size: Size,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new(CANVAS_DEFAULT)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageExport<'a> {
    canvas: Size,
    elements: Vec<&'a ElementRecord>,
}

impl BuilderState {
    pub fn new(canvas_size: Size) -> Self {
        Self {
            elements: HashMap::new(),
            order: Vec::new(),
            selected_id: None,
            canvas_size: Size::new(
                canvas_size.width.clamp(CANVAS_MIN.width, CANVAS_MAX.width),
                canvas_size.height.clamp(CANVAS_MIN.height, CANVAS_MAX.height),
            ),
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementRecord> {
        self.elements.get(&id).map(Rc::as_ref)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&ElementRecord> {
        self.selected_id.and_then(|id| self.get(id))
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Records in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &ElementRecord> + '_ {
        self.order.iter().filter_map(|id| self.get(*id))
    }

    /// The page as pretty-printed JSON, elements in paint order.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&PageExport {
            canvas: self.canvas_size,
            elements: self.elements().collect(),
        })
    }

    pub fn reduce(&self, action: Action) -> Result<BuilderState, StoreError> {
        match action {
            Action::Add {
                id,
                kind,
                position,
                parent,
            } => self.add(ElementRecord::new(id, kind, position), parent),
            Action::Update { id, patch } => self.update(id, patch),
            Action::Delete(id) => Ok(self.delete(id)),
            Action::Select(id) => self.select(id),
            Action::Move { id, position } => self.update(id, ElementPatch::position(position)),
            Action::Reparent { id, parent } => self.reparent(id, parent),
            Action::Paste(mut record) => {
                record.children.clear();
                record.parent_id = None;
                self.add(record, None)
            }
        }
    }

    fn add(&self, mut record: ElementRecord, parent: Option<ElementId>) -> Result<Self, StoreError> {
        let id = record.id;
        if self.contains(id) {
            return Err(StoreError::DuplicateId(id));
        }
        if let Some(parent) = parent {
            self.check_container(parent)?;
        }

        let mut next = self.clone();
        record.parent_id = parent;
        if let Some(parent) = parent {
            next.record_mut(parent)?.children.push(id);
        }
        next.elements.insert(id, Rc::new(record));
        next.order.push(id);
        next.selected_id = Some(id);
        Ok(next)
    }

    fn update(&self, id: ElementId, patch: ElementPatch) -> Result<Self, StoreError> {
        let current = self.get(id).ok_or(StoreError::NotFound(id))?;
        if let Some(props) = &patch.props {
            if props.kind() != current.kind() {
                return Err(StoreError::KindMismatch {
                    id,
                    expected: current.kind(),
                    found: props.kind(),
                });
            }
        }

        let mut next = self.clone();
        let record = next.record_mut(id)?;
        if let Some(position) = patch.position {
            record.position = position;
        }
        if let Some(size) = patch.size {
            record.size = size;
        }
        if let Some(props) = patch.props {
            record.props = props;
        }
        Ok(next)
    }

    /// Removes `id` and everything nested in it. Absent ids leave the state as is.
    fn delete(&self, id: ElementId) -> Self {
        let Some(record) = self.get(id) else {
            return self.clone();
        };
        let parent = record.parent_id;
        let doomed: HashSet<ElementId> = self.subtree(id).into_iter().collect();

        let mut next = self.clone();
        if let Some(parent) = parent {
            if let Ok(parent) = next.record_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
        next.elements.retain(|key, _| !doomed.contains(key));
        next.order.retain(|key| !doomed.contains(key));
        if next.selected_id.is_some_and(|selected| doomed.contains(&selected)) {
            next.selected_id = None;
        }
        next
    }

    fn select(&self, id: Option<ElementId>) -> Result<Self, StoreError> {
        if let Some(id) = id {
            if !self.contains(id) {
                return Err(StoreError::NotFound(id));
            }
        }
        let mut next = self.clone();
        next.selected_id = id;
        Ok(next)
    }

    fn reparent(&self, id: ElementId, parent: Option<ElementId>) -> Result<Self, StoreError> {
        let record = self.get(id).ok_or(StoreError::NotFound(id))?;
        if record.parent_id == parent {
            return Ok(self.clone());
        }
        if let Some(parent) = parent {
            self.check_container(parent)?;
            if self.subtree(id).contains(&parent) {
                return Err(StoreError::Cycle { child: id, parent });
            }
        }

        let old_parent = record.parent_id;
        let mut next = self.clone();
        if let Some(old_parent) = old_parent {
            next.record_mut(old_parent)?.children.retain(|child| *child != id);
        }
        if let Some(parent) = parent {
            next.record_mut(parent)?.children.push(id);
        }
        next.record_mut(id)?.parent_id = parent;
        Ok(next)
    }

    fn check_container(&self, id: ElementId) -> Result<(), StoreError> {
        match self.get(id) {
            None => Err(StoreError::NotFound(id)),
            Some(record) if !record.is_container() => Err(StoreError::InvalidParent(id)),
            Some(_) => Ok(()),
        }
    }

    /// `id` followed by all of its descendants, depth first.
    pub fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if out.contains(&current) {
                continue;
            }
            out.push(current);
            if let Some(record) = self.get(current) {
                stack.extend(record.children.iter().rev().copied());
            }
        }
        out
    }

    fn record_mut(&mut self, id: ElementId) -> Result<&mut ElementRecord, StoreError> {
        self.elements
            .get_mut(&id)
            .map(Rc::make_mut)
            .ok_or(StoreError::NotFound(id))
    }
}
