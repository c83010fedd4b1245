use dioxus::prelude::*;

use crate::config::CONTAINER_DROP_INSET;

use super::model::{ElementId, ElementKind, Point};
use super::state::{Action, BuilderState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPayload {
    /// A palette template; dropping it creates a new element.
    Template(ElementKind),
    /// An element already on the canvas, grabbed `grab` canvas units from its corner.
    Existing { id: ElementId, grab: Point },
}

pub static DRAG_PAYLOAD: GlobalSignal<Option<DragPayload>> = Signal::global(|| None);

/// Topmost container whose box contains `point`, ignoring `exclude` and its descendants.
pub fn container_at(state: &BuilderState, point: Point, exclude: Option<ElementId>) -> Option<ElementId> {
    let excluded = exclude.map(|id| state.subtree(id)).unwrap_or_default();
    let hits: Vec<_> = state
        .elements()
        .filter(|record| record.is_container() && !excluded.contains(&record.id))
        .filter(|record| {
            point.x >= record.position.x
                && point.x < record.position.x + record.size.width
                && point.y >= record.position.y
                && point.y < record.position.y + record.size.height
        })
        .map(|record| record.id)
        .collect();
    hits.last().copied()
}

/// Actions for dropping `payload` at canvas point `at`.
pub fn drop_actions(state: &BuilderState, payload: DragPayload, at: Point) -> Vec<Action> {
    match payload {
        DragPayload::Template(kind) => match container_at(state, at, None).and_then(|id| state.get(id)) {
            Some(container) => vec![Action::add_into(
                kind,
                container.position.offset(CONTAINER_DROP_INSET),
                container.id,
            )],
            None => vec![Action::add(kind, at)],
        },
        DragPayload::Existing { id, grab } => {
            let Some(record) = state.get(id) else {
                return Vec::new();
            };
            let mut actions = Vec::new();
            let parent = container_at(state, at, Some(id));
            if parent != record.parent_id {
                actions.push(Action::Reparent { id, parent });
            }
            actions.push(Action::Move {
                id,
                position: Point::new(at.x - grab.x, at.y - grab.y),
            });
            actions
        }
    }
}
