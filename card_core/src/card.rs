//! # The Welcome Card
//!
//! The view tree builder: constructs the fixed tree for the demo's single
//! screen. Construction is deterministic, takes no input, and cannot fail;
//! calling [`welcome_card`] repeatedly yields structurally equal trees.

use crate::style::{
    BackgroundFill, Color, ContainerStyle, FontStyle, FontWeight, Shadow, DEFAULT_PADDING,
};
use crate::view::{Action, ActionButton, IconGlyph, Stack, TextLabel, View, Window};

/// Window width in logical pixels
pub const WINDOW_WIDTH: f32 = 300.0;

/// Window height in logical pixels
pub const WINDOW_HEIGHT: f32 = 200.0;

/// Build the welcome card.
///
/// The tree is a 300x200 window holding one vertical stack (spacing 20)
/// with three children: the "Bienvenido" title, the blue "Acción" button,
/// and a star-icon row reading "Favorito". The stack itself is decorated
/// with default padding, a purple-to-blue gradient, rounded corners, and a
/// drop shadow.
///
/// # Example
///
/// ```rust
/// use card_core::{welcome_card, Axis, View};
///
/// let card = welcome_card();
/// match &card.root {
///     View::Stack(stack) => {
///         assert_eq!(stack.axis, Axis::Vertical);
///         assert_eq!(stack.children.len(), 3);
///     }
///     other => panic!("unexpected root: {other:?}"),
/// }
/// ```
pub fn welcome_card() -> Window {
    let title = TextLabel::new("Bienvenido")
        .with_font(FontStyle::Title)
        .with_color(Color::WHITE);

    let action_button = ActionButton {
        label: TextLabel::new("Acción")
            .with_weight(FontWeight::Bold)
            .with_color(Color::WHITE),
        width: 120.0,
        height: 40.0,
        background: Color::BLUE,
        corner_radius: 8.0,
        action: Action::NoOp,
    };

    let favorite_row = Stack::horizontal()
        .with_child(IconGlyph::new("star", Color::YELLOW))
        .with_child(TextLabel::new("Favorito").with_color(Color::WHITE));

    let card = Stack::vertical(20.0)
        .with_child(title)
        .with_child(action_button)
        .with_child(favorite_row)
        .with_style(ContainerStyle {
            padding: DEFAULT_PADDING,
            background: Some(BackgroundFill::LinearGradient {
                top: Color::PURPLE,
                bottom: Color::BLUE,
            }),
            corner_radius: 15.0,
            shadow: Some(Shadow { blur_radius: 10.0 }),
        });

    Window::new(WINDOW_WIDTH, WINDOW_HEIGHT, View::Stack(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Axis;

    fn root_stack(window: &Window) -> &Stack {
        match &window.root {
            View::Stack(stack) => stack,
            other => panic!("root is not a stack: {other:?}"),
        }
    }

    #[test]
    fn test_window_dimensions() {
        let card = welcome_card();
        assert_eq!(card.width, 300.0);
        assert_eq!(card.height, 200.0);
    }

    #[test]
    fn test_root_is_vertical_stack_with_spacing() {
        let card = welcome_card();
        let stack = root_stack(&card);
        assert_eq!(stack.axis, Axis::Vertical);
        assert_eq!(stack.spacing, 20.0);
        assert_eq!(stack.children.len(), 3);
    }

    #[test]
    fn test_title_label() {
        let card = welcome_card();
        match &root_stack(&card).children[0] {
            View::Label(label) => {
                assert_eq!(label.content, "Bienvenido");
                assert_eq!(label.font, FontStyle::Title);
                assert_eq!(label.color, Color::WHITE);
            }
            other => panic!("first child is not a label: {other:?}"),
        }
    }

    #[test]
    fn test_action_button() {
        let card = welcome_card();
        match &root_stack(&card).children[1] {
            View::Button(button) => {
                assert_eq!(button.label.content, "Acción");
                assert_eq!(button.label.weight, FontWeight::Bold);
                assert_eq!(button.label.color, Color::WHITE);
                assert_eq!((button.width, button.height), (120.0, 40.0));
                assert_eq!(button.background, Color::BLUE);
                assert_eq!(button.corner_radius, 8.0);
                assert_eq!(button.action, Action::NoOp);
            }
            other => panic!("second child is not a button: {other:?}"),
        }
    }

    #[test]
    fn test_invoking_action_changes_nothing() {
        let card = welcome_card();
        match &root_stack(&card).children[1] {
            View::Button(button) => button.action.invoke(),
            other => panic!("second child is not a button: {other:?}"),
        }
        // The tree is unchanged after the press
        assert_eq!(card, welcome_card());
    }

    #[test]
    fn test_favorite_row() {
        let card = welcome_card();
        let row = match &root_stack(&card).children[2] {
            View::Stack(row) => row,
            other => panic!("third child is not a stack: {other:?}"),
        };
        assert_eq!(row.axis, Axis::Horizontal);
        assert_eq!(row.children.len(), 2);

        match &row.children[0] {
            View::Icon(icon) => {
                assert_eq!(icon.name, "star");
                assert_eq!(icon.tint, Color::YELLOW);
            }
            other => panic!("row does not start with an icon: {other:?}"),
        }
        match &row.children[1] {
            View::Label(label) => {
                assert_eq!(label.content, "Favorito");
                assert_eq!(label.color, Color::WHITE);
            }
            other => panic!("row does not end with a label: {other:?}"),
        }
    }

    #[test]
    fn test_card_container_styling() {
        let card = welcome_card();
        let style = &root_stack(&card).style;

        assert_eq!(style.padding, DEFAULT_PADDING);
        assert_eq!(style.corner_radius, 15.0);
        assert_eq!(style.shadow, Some(Shadow { blur_radius: 10.0 }));
        assert_eq!(
            style.background,
            Some(BackgroundFill::LinearGradient {
                top: Color::PURPLE,
                bottom: Color::BLUE,
            })
        );
    }

    #[test]
    fn test_builder_is_idempotent() {
        assert_eq!(welcome_card(), welcome_card());
    }

    #[test]
    fn test_node_count() {
        // stack + title + button + row + icon + label
        assert_eq!(welcome_card().node_count(), 6);
    }

    #[test]
    fn test_json_roundtrip() {
        let card = welcome_card();
        let json = serde_json::to_string_pretty(&card).unwrap();
        assert!(json.contains("Bienvenido"));
        assert!(json.contains("Acción"));
        assert!(json.contains("Favorito"));

        let roundtrip: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, card);
    }
}
