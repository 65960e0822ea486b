/// Pointer position in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click event
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// A drag gesture started on `target`
    DragStart {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// The dragged pointer entered `target`
    DragEnter {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// The dragged pointer moved while over `target`
    DragOver {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// The dragged pointer was released over `target`
    Drop {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// The drag gesture finished, dropped or not
    DragEnd { target: Option<String> },
    /// Page-level pointer movement
    PointerMove { x: u16, y: u16 },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. }
            | Self::DragStart { target, .. }
            | Self::DragEnter { target, .. }
            | Self::DragOver { target, .. }
            | Self::Drop { target, .. }
            | Self::DragEnd { target } => target.as_deref(),
            Self::PointerMove { .. } => None,
        }
    }

    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Click { x, y, .. }
            | Self::DragStart { x, y, .. }
            | Self::DragEnter { x, y, .. }
            | Self::DragOver { x, y, .. }
            | Self::Drop { x, y, .. }
            | Self::PointerMove { x, y } => Some(Point::new(x, y)),
            Self::DragEnd { .. } => None,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Operation a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Drag session data negotiated between the drag source and the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    pub effect_allowed: DropEffect,
    /// Element used as the native drag image, with its pointer offset.
    pub drag_image: Option<(String, u16, u16)>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_drag_image(&mut self, id: impl Into<String>, offset_x: u16, offset_y: u16) {
        self.drag_image = Some((id.into(), offset_x, offset_y));
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
