use std::rc::Rc;
use std::time::Duration;

use arbor::dom::{DragGesture, Element, LayoutResult, PointerInput, Size, Terminal, TextStyle};
use arbor::{EventResult, Flag, Tree, TreeConfig, TreeHooks};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use log::{debug, info};

use crate::cli::Options;
use crate::data::{self, Record};
use crate::error::DemoError;
use crate::hooks::DemoHooks;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    tree: Tree<String>,
    hooks: Rc<DemoHooks>,
    gesture: DragGesture,
    running: bool,
    status: Option<String>,
}

impl App {
    pub fn new(options: &Options, records: &[Record]) -> Self {
        let hooks = Rc::new(DemoHooks::new());
        let config = TreeConfig::new()
            .name("items")
            .flag(Flag::Selectable, options.select)
            .flag(Flag::Draggable, options.drag);
        let shared: Rc<dyn TreeHooks<String>> = hooks.clone();
        let mut tree = Tree::with_hooks(config, shared);
        data::populate(&mut tree, records);
        info!("Loaded {} top-level items", tree.length());

        Self {
            tree,
            hooks,
            gesture: DragGesture::new(),
            running: true,
            status: None,
        }
    }

    pub fn tree(&self) -> &Tree<String> {
        &self.tree
    }

    pub fn hooks(&self) -> &DemoHooks {
        &self.hooks
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn view(&self) -> Element {
        Element::col()
            .width(Size::Fill)
            .gap(1)
            .child(Element::text("arbor demo").style(TextStyle::new().bold()))
            .child(self.tree().render())
            .child(Element::text(self.status_line()).style(TextStyle::new().dim()))
    }

    fn status_line(&self) -> String {
        let hooks = self.hooks();
        let selected = hooks.selected().unwrap_or_else(|| "-".to_string());
        let mut line = format!(
            "selected: {selected} | moves: {} | v validate | q quit",
            hooks.moves()
        );
        if let Some(status) = &self.status {
            line.push_str(" | ");
            line.push_str(status);
        }
        // Rows are one cell tall, so the hovered row's upper half is all there is
        if self.tree().is_dragging() {
            line.push_str(" | dropping before the hovered row");
        }
        line
    }

    /// Feed one pointer input through the gesture and into the tree.
    pub fn handle_pointer(
        &mut self,
        input: PointerInput,
        view: &Element,
        layout: &LayoutResult,
    ) -> Vec<EventResult> {
        self.gesture
            .handle(input, view, layout)
            .iter()
            .map(|event| {
                let result = self.tree.dispatch(event, layout);
                if result.is_handled() {
                    debug!("{event:?} -> {result:?}");
                }
                result
            })
            .collect()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('v') => {
                let valid = self.tree.report_validity();
                info!("Validity check: {valid}");
                self.status = Some(if valid { "valid" } else { "invalid" }.to_string());
            }
            _ => {}
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), DemoError> {
        while self.is_running() {
            let view = self.view();
            let layout = terminal.render(&view)?.clone();

            for event in terminal.poll(Some(POLL_INTERVAL))? {
                match event {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code)
                    }
                    CrosstermEvent::Mouse(mouse) => {
                        if let Some(input) = PointerInput::from_mouse(&mouse) {
                            self.handle_pointer(input, &view, &layout);
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
