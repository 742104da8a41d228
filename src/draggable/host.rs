use std::collections::BTreeSet;

use egui::{Pos2, Rect, Vec2};

use super::types::ElementId;

/// Geometry the controller reads from the host: page-space bounding boxes and the parent
/// relation.
pub trait LayoutQuery {
    /// Bounding box of `element` in page coordinates, including any applied translation.
    fn rect(&self, element: ElementId) -> Option<Rect>;

    fn parent_of(&self, element: ElementId) -> Option<ElementId>;

    fn parent_rect(&self, element: ElementId) -> Option<Rect> {
        self.rect(self.parent_of(element)?)
    }
}

/// Applies a parent-local position to an element's rendered box.
pub trait TransformApplier {
    fn translate(&mut self, element: ElementId, pos: Pos2);
}

pub trait ClassToggler {
    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
}

/// Everything a [`super::Draggable`] needs from the outside world.
pub trait DragHost: LayoutQuery + TransformApplier + ClassToggler {}

impl<T: LayoutQuery + TransformApplier + ClassToggler + ?Sized> DragHost for T {}

// ----------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    pub parent: Option<ElementId>,

    /// Position relative to the parent's top-left corner (page position for roots).
    pub offset: Vec2,

    pub size: Vec2,

    pub classes: BTreeSet<String>,
}

/// A minimal retained box tree implementing [`DragHost`].
///
/// Translating a node sets its parent-local offset, so its reported [`LayoutQuery::rect`]
/// follows the last applied position. Used by the demo and the tests; real applications
/// usually implement the traits on top of their own layout.
#[derive(Clone, Debug, Default)]
pub struct SceneHost {
    nodes: ahash::HashMap<ElementId, SceneNode>,
}

impl SceneHost {
    /// Parent chains deeper than this are treated as cycles.
    const MAX_DEPTH: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parentless node at a page-space rect.
    pub fn insert_root(&mut self, id: ElementId, rect: Rect) {
        self.nodes.insert(
            id,
            SceneNode {
                parent: None,
                offset: rect.min.to_vec2(),
                size: rect.size(),
                classes: BTreeSet::new(),
            },
        );
    }

    pub fn insert_child(&mut self, id: ElementId, parent: ElementId, offset: Vec2, size: Vec2) {
        self.nodes.insert(
            id,
            SceneNode {
                parent: Some(parent),
                offset,
                size,
                classes: BTreeSet::new(),
            },
        );
    }

    pub fn node(&self, id: ElementId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|node| node.classes.contains(class))
    }

    fn page_min(&self, id: ElementId) -> Option<Pos2> {
        let mut node = self.nodes.get(&id)?;
        let mut min = node.offset;
        for _ in 0..Self::MAX_DEPTH {
            let Some(parent) = node.parent else {
                return Some(min.to_pos2());
            };
            node = self.nodes.get(&parent)?;
            min += node.offset;
        }
        log::warn!("SceneHost: parent chain of {id:?} is too deep (cycle?)");
        None
    }
}

impl LayoutQuery for SceneHost {
    fn rect(&self, element: ElementId) -> Option<Rect> {
        let size = self.nodes.get(&element)?.size;
        Some(Rect::from_min_size(self.page_min(element)?, size))
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element)?.parent
    }
}

impl TransformApplier for SceneHost {
    fn translate(&mut self, element: ElementId, pos: Pos2) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.offset = pos.to_vec2();
        }
    }
}

impl ClassToggler for SceneHost {
    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.remove(class);
        }
    }
}
