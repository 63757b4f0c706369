//! # View Tree Nodes
//!
//! The node types that make up a view tree: one [`Window`] at the root,
//! [`Stack`] containers arranging children along an axis, and leaf elements
//! ([`TextLabel`], [`ActionButton`], [`IconGlyph`]) carrying presentation
//! attributes only.
//!
//! ## Structure
//!
//! ```text
//! Window
//! └── View (root)
//!     ├── Stack (axis, spacing, style, children)
//!     ├── Label (content, font, weight, color)
//!     ├── Button (label, size, background, corner radius, action)
//!     └── Icon (symbolic name, tint)
//! ```
//!
//! Ownership is strictly hierarchical: children live in a `Vec<View>` owned
//! by their parent. The tree is therefore acyclic and finite by
//! construction.
//!
//! ## Example
//!
//! ```rust
//! use card_core::style::Color;
//! use card_core::view::{Stack, TextLabel, View, Window};
//!
//! let root = Stack::vertical(20.0)
//!     .with_child(TextLabel::new("Hola").with_color(Color::WHITE));
//!
//! let window = Window::new(300.0, 200.0, View::Stack(root));
//! assert_eq!(window.node_count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::style::{Color, ContainerStyle, FontStyle, FontWeight, DEFAULT_SPACING};

/// Top-level window description: fixed logical size plus one root view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Window width in logical pixels
    pub width: f32,

    /// Window height in logical pixels
    pub height: f32,

    /// The single root view
    pub root: View,
}

impl Window {
    pub fn new(width: f32, height: f32, root: View) -> Self {
        Window { width, height, root }
    }

    /// Total number of view nodes in the window, the root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

/// A node in the view tree.
///
/// ## JSON Serialization
///
/// Nodes serialize with a `"type"` discriminator:
///
/// ```json
/// { "type": "Label", "content": "Favorito", ... }
/// { "type": "Stack", "axis": "Horizontal", "children": [...] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum View {
    /// Container arranging children along an axis
    Stack(Stack),
    /// Static text
    Label(TextLabel),
    /// Pressable button wrapping a label
    Button(ActionButton),
    /// Symbolic icon glyph
    Icon(IconGlyph),
}

impl View {
    /// Total number of nodes in this subtree, `self` included.
    pub fn node_count(&self) -> usize {
        match self {
            View::Stack(stack) => {
                1 + stack.children.iter().map(View::node_count).sum::<usize>()
            }
            View::Label(_) | View::Button(_) | View::Icon(_) => 1,
        }
    }

    /// Whether this node is a leaf element (carries no children).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, View::Stack(_))
    }
}

/// Layout axis of a [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// A container that arranges child views along an axis with inter-child
/// spacing, optionally decorated with a [`ContainerStyle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub axis: Axis,

    /// Gap between consecutive children, in logical pixels
    pub spacing: f32,

    /// Decorative styling around the children
    pub style: ContainerStyle,

    /// Ordered child nodes
    pub children: Vec<View>,
}

impl Stack {
    /// Vertical stack with explicit inter-child spacing and no styling.
    pub fn vertical(spacing: f32) -> Self {
        Stack {
            axis: Axis::Vertical,
            spacing,
            style: ContainerStyle::default(),
            children: Vec::new(),
        }
    }

    /// Horizontal stack with framework-default spacing and no styling.
    pub fn horizontal() -> Self {
        Stack {
            axis: Axis::Horizontal,
            spacing: DEFAULT_SPACING,
            style: ContainerStyle::default(),
            children: Vec::new(),
        }
    }

    /// Replace the container styling.
    pub fn with_style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Static text with font and color attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub content: String,
    pub font: FontStyle,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextLabel {
    /// Body-style, normal-weight label in the default text color.
    pub fn new(content: impl Into<String>) -> Self {
        TextLabel {
            content: content.into(),
            font: FontStyle::default(),
            weight: FontWeight::default(),
            color: Color::default(),
        }
    }

    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A fixed-size button wrapping a [`TextLabel`], holding the [`Action`] to
/// run when pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: TextLabel,
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub corner_radius: f32,
    pub action: Action,
}

/// A zero-argument button behavior.
///
/// Modeled as data rather than a closure so the description stays
/// serializable and comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Intentionally does nothing when invoked
    NoOp,
}

impl Action {
    /// Run the action synchronously. [`Action::NoOp`] performs no work.
    pub fn invoke(&self) {
        match self {
            Action::NoOp => {}
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::NoOp
    }
}

/// A symbolic icon reference with a tint color. The host framework resolves
/// the name to an actual glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconGlyph {
    pub name: String,
    pub tint: Color,
}

impl IconGlyph {
    pub fn new(name: impl Into<String>, tint: Color) -> Self {
        IconGlyph {
            name: name.into(),
            tint,
        }
    }
}

impl From<Stack> for View {
    fn from(stack: Stack) -> Self {
        View::Stack(stack)
    }
}

impl From<TextLabel> for View {
    fn from(label: TextLabel) -> Self {
        View::Label(label)
    }
}

impl From<ActionButton> for View {
    fn from(button: ActionButton) -> Self {
        View::Button(button)
    }
}

impl From<IconGlyph> for View {
    fn from(icon: IconGlyph) -> Self {
        View::Icon(icon)
    }
}
