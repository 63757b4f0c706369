//! UI module for the Bienvenida GUI
//!
//! # Components
//! - `card` - Renders the welcome-card view tree into iced widgets
//! - `style` - Maps model styling attributes onto iced types
//! - `icons` - Symbolic icon name to text glyph resolution

pub mod card;
pub mod icons;
pub mod style;
