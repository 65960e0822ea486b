use std::cell::{Cell, RefCell};

use arbor::dom::{Element, TextStyle};
use arbor::{MoveNode, RenderMirror, RenderNode, TreeHooks};
use log::info;

/// Horizontal distance between the pointer and the drag preview.
const MIRROR_OFFSET: u16 = 2;

/// Renders items as file-browser rows and records what the user did.
#[derive(Debug, Default)]
pub struct DemoHooks {
    moves: Cell<usize>,
    selected: RefCell<Option<String>>,
}

impl DemoHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed drag reorders so far.
    pub fn moves(&self) -> usize {
        self.moves.get()
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }
}

impl TreeHooks<String> for DemoHooks {
    fn render_node(&self, request: &mut RenderNode<'_, String>) -> bool {
        request.dragger = Some(Element::text("≡").style(TextStyle::new().dim()));
        request.checker = Some(Element::checkbox(false));
        request.opener = Some(Element::text("▸"));
        request.content = Some(Element::text(request.data.clone()));
        true
    }

    fn render_mirror(&self, request: &mut RenderMirror<'_, String>) -> bool {
        request.mirror = Some(
            Element::text(format!("» {}", request.data)).style(TextStyle::new().bold().reverse()),
        );
        true
    }

    fn move_node(&self, request: &mut MoveNode<'_, String>) -> bool {
        request.x = request.x.map(|x| x.saturating_add(MIRROR_OFFSET));
        true
    }

    fn on_change(&self) {
        let moves = self.moves.get() + 1;
        self.moves.set(moves);
        info!("Order changed ({moves} moves so far)");
    }

    fn on_select(&self, selected: Option<&String>) {
        match selected {
            Some(item) => info!("Selected {item}"),
            None => info!("Selection cleared"),
        }
        *self.selected.borrow_mut() = selected.cloned();
    }
}
