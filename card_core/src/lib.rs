//! # card_core - Welcome Card View-Tree Description
//!
//! `card_core` is the model layer of Bienvenida: a static, immutable
//! description of a single-screen UI, built once and handed to a host UI
//! framework for rendering. All types are JSON-serializable, so the tree
//! doubles as a wire/debug format.
//!
//! ## Design Philosophy
//!
//! - **Descriptive**: nodes carry presentation attributes, never behavior
//!   (the one exception, [`view::Action`], is a named no-op)
//! - **Immutable**: the tree is fixed at construction; parents exclusively
//!   own their children, with no shared or back references
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use card_core::welcome_card;
//!
//! let card = welcome_card();
//! assert_eq!((card.width, card.height), (300.0, 200.0));
//!
//! // Serialize the description for inspection or transmission
//! let json = serde_json::to_string_pretty(&card).unwrap();
//! assert!(json.contains("Bienvenido"));
//! ```
//!
//! ## Modules
//!
//! - [`card`] - The view tree builder (the fixed welcome card)
//! - [`view`] - View-tree node types (window, stacks, leaf elements)
//! - [`style`] - Presentation attributes (colors, fonts, fills, shadow)

pub mod card;
pub mod style;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use card::welcome_card;
pub use style::{BackgroundFill, Color, ContainerStyle, FontStyle, FontWeight, Shadow};
pub use view::{Action, ActionButton, Axis, IconGlyph, Stack, TextLabel, View, Window};
