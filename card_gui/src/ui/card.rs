//! Welcome card rendering
//!
//! Walks the `card_core` description tree and maps each node onto the
//! corresponding iced widget: vertical stacks become columns, horizontal
//! stacks become rows, labels and icons become text, buttons become
//! fixed-size styled buttons. The card is content-sized and centered in
//! the window.

use card_core::{ActionButton, Axis, FontStyle, IconGlyph, Stack, TextLabel, View, Window};
use iced::widget::text::Shaping;
use iced::widget::{button, center, container, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::ui::icons;
use crate::ui::style::{button_appearance, container_appearance, font_size, to_color, to_font};
use crate::Message;

/// Render the full window content: the card, centered.
pub fn view_card(window: &Window) -> Element<'_, Message> {
    center(view_node(&window.root)).into()
}

/// Render a single view-tree node.
fn view_node(node: &View) -> Element<'_, Message> {
    match node {
        View::Stack(stack) => view_stack(stack),
        View::Label(label) => view_label(label),
        View::Button(btn) => view_button(btn),
        View::Icon(icon) => view_icon(icon),
    }
}

fn view_stack(stack: &Stack) -> Element<'_, Message> {
    let content: Element<'_, Message> = match stack.axis {
        Axis::Vertical => {
            let mut column = Column::new()
                .spacing(stack.spacing)
                .align_x(Alignment::Center);
            for child in &stack.children {
                column = column.push(view_node(child));
            }
            column.into()
        }
        Axis::Horizontal => {
            let mut row = Row::new()
                .spacing(stack.spacing)
                .align_y(Alignment::Center);
            for child in &stack.children {
                row = row.push(view_node(child));
            }
            row.into()
        }
    };

    let appearance = container_appearance(&stack.style);
    container(content)
        .padding(stack.style.padding)
        .style(move |_theme| appearance)
        .into()
}

fn view_label(label: &TextLabel) -> Element<'_, Message> {
    text(label.content.as_str())
        .size(font_size(label.font))
        .font(to_font(label.weight))
        .color(to_color(label.color))
        .shaping(Shaping::Advanced)
        .into()
}

fn view_button(btn: &ActionButton) -> Element<'_, Message> {
    let appearance = button_appearance(btn);

    button(center(view_label(&btn.label)))
        .width(Length::Fixed(btn.width))
        .height(Length::Fixed(btn.height))
        .padding(0)
        .on_press(Message::Invoke(btn.action.clone()))
        .style(move |_theme, _status| appearance)
        .into()
}

fn view_icon(icon: &IconGlyph) -> Element<'_, Message> {
    text(icons::glyph(&icon.name))
        .size(font_size(FontStyle::Body))
        .color(to_color(icon.tint))
        .shaping(Shaping::Advanced)
        .into()
}
