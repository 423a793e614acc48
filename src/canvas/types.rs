//! Core geometry types for the canvas engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The page the elements are placed on. Origin is fixed at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width: f64,
    pub height: f64,
}

impl Page {
    /// A4 at 72 dpi
    pub const A4: Page = Page {
        width: 595.0,
        height: 842.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point of the page
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::A4
    }
}

fn default_selectable() -> bool {
    true
}

/// A placed element on the canvas.
///
/// Only the geometry the snapping engine needs is kept here. Hosts that work
/// with scaled rendering objects resolve them first, see [`super::scene::ResolveRect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Non-selectable elements (guide lines, badges) never take part in
    /// guide, snap or overflow computation.
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            x,
            y,
            width,
            height,
            selectable: true,
        }
    }

    /// Set the element identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the element as selectable or not
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether `other` is the same placed element.
    ///
    /// Identity is the element id when both carry one, otherwise the
    /// reference itself. Two elements with equal geometry are still distinct.
    pub fn is_same_element(&self, other: &Rect) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Axis a guide line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Line of constant x
    Vertical,
    /// Line of constant y
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// What a guide aligns against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    Center,
    Left,
    Right,
    Top,
    Bottom,
    PageCenter,
    PageLeft,
    PageRight,
    PageTop,
    PageBottom,
}

impl GuideKind {
    /// Whether the guide comes from the page rather than a sibling
    pub fn is_page(&self) -> bool {
        matches!(
            self,
            GuideKind::PageCenter
                | GuideKind::PageLeft
                | GuideKind::PageRight
                | GuideKind::PageTop
                | GuideKind::PageBottom
        )
    }
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuideKind::Center => "center",
            GuideKind::Left => "left",
            GuideKind::Right => "right",
            GuideKind::Top => "top",
            GuideKind::Bottom => "bottom",
            GuideKind::PageCenter => "page_center",
            GuideKind::PageLeft => "page_left",
            GuideKind::PageRight => "page_right",
            GuideKind::PageTop => "page_top",
            GuideKind::PageBottom => "page_bottom",
        };
        write!(f, "{}", name)
    }
}

/// An alignment guide. Recomputed from scratch on every interaction tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: Axis,
    /// x for vertical guides, y for horizontal guides
    pub position: f64,
    pub kind: GuideKind,
}

impl Guide {
    pub fn new(axis: Axis, position: f64, kind: GuideKind) -> Self {
        Self {
            axis,
            position,
            kind,
        }
    }

    pub fn vertical(position: f64, kind: GuideKind) -> Self {
        Self::new(Axis::Vertical, position, kind)
    }

    pub fn horizontal(position: f64, kind: GuideKind) -> Self {
        Self::new(Axis::Horizontal, position, kind)
    }
}

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.axis, self.kind, self.position)
    }
}
