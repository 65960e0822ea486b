//! Translation of raw mouse input into click and drag-and-drop events.
//!
//! Terminals only report press / motion / release. [`DragGesture`] turns
//! those into the [`Event`] sequence a drag-aware widget expects:
//! `DragStart`, then `DragEnter` whenever the hovered element changes and
//! `DragOver` on every motion, and finally `Drop` (when released over an
//! element) followed by `DragEnd`. A press released without moving past the
//! threshold becomes a `Click`.

use crate::element::Element;
use crate::event::{Event, MouseButton, Point};
use crate::hit::hit_test_any;
use crate::layout::LayoutResult;

/// Raw pointer input, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Press { x: u16, y: u16, button: MouseButton },
    Motion { x: u16, y: u16 },
    Release { x: u16, y: u16, button: MouseButton },
}

impl PointerInput {
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(button) => Some(Self::Press {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(Self::Motion { x, y }),
            MouseEventKind::Up(button) => Some(Self::Release {
                x,
                y,
                button: button.into(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
enum GestureState {
    #[default]
    Idle,
    Pressed {
        origin: Point,
        button: MouseButton,
        target: Option<String>,
    },
    Dragging {
        source: Option<String>,
        hover: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    /// Cells the pointer must travel before a press becomes a drag.
    threshold: u16,
    state: GestureState,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            threshold: 1,
            state: GestureState::Idle,
        }
    }

    pub fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold.max(1);
        self
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Feed one input; returns the events to dispatch, in order.
    pub fn handle(&mut self, input: PointerInput, root: &Element, layout: &LayoutResult) -> Vec<Event> {
        let mut events = Vec::new();

        match input {
            PointerInput::Press { x, y, button } => {
                self.state = GestureState::Pressed {
                    origin: Point::new(x, y),
                    button,
                    target: hit_test_any(layout, root, x, y),
                };
            }
            PointerInput::Motion { x, y } => {
                if let GestureState::Pressed {
                    origin,
                    button: MouseButton::Left,
                    target,
                } = &self.state
                {
                    if origin.x.abs_diff(x).max(origin.y.abs_diff(y)) >= self.threshold {
                        log::trace!("Drag started from {target:?}");
                        events.push(Event::DragStart {
                            target: target.clone(),
                            x: origin.x,
                            y: origin.y,
                        });
                        self.state = GestureState::Dragging {
                            source: target.clone(),
                            hover: None,
                        };
                    }
                }

                if let GestureState::Dragging { hover, .. } = &mut self.state {
                    let current = hit_test_any(layout, root, x, y);
                    if current.is_some() && current != *hover {
                        events.push(Event::DragEnter {
                            target: current.clone(),
                            x,
                            y,
                        });
                    }
                    *hover = current.clone();
                    events.push(Event::DragOver {
                        target: current,
                        x,
                        y,
                    });
                }
            }
            PointerInput::Release { x, y, button } => {
                match std::mem::take(&mut self.state) {
                    GestureState::Pressed {
                        button: pressed,
                        target,
                        ..
                    } if pressed == button => {
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button,
                        });
                    }
                    GestureState::Dragging { source, hover } => {
                        let over = hit_test_any(layout, root, x, y).or(hover);
                        if over.is_some() {
                            events.push(Event::Drop { target: over, x, y });
                        }
                        log::trace!("Drag ended for {source:?}");
                        events.push(Event::DragEnd { target: source });
                    }
                    _ => {}
                }
            }
        }

        events
    }
}
