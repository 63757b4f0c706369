//! Mapping from model styling attributes to iced types
//!
//! `card_core` describes presentation in framework-neutral terms; this
//! module is the single place where those terms become iced colors, fonts,
//! backgrounds, and widget styles.

use std::f32::consts::PI;

use card_core::{ActionButton, BackgroundFill, Color, ContainerStyle, FontStyle, FontWeight};
use iced::widget::{button, container};
use iced::{gradient, Gradient, Radians, Vector};

/// Text size for [`FontStyle::Title`]
pub const TITLE_TEXT_SIZE: f32 = 28.0;

/// Text size for [`FontStyle::Body`]
pub const BODY_TEXT_SIZE: f32 = 16.0;

/// Convert a model color to an iced color.
pub fn to_color(color: Color) -> iced::Color {
    iced::Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/// Convert a background fill to an iced background. Gradients run top to
/// bottom (angle pi puts the first stop at the top edge).
pub fn to_background(fill: &BackgroundFill) -> iced::Background {
    match *fill {
        BackgroundFill::Solid { color } => iced::Background::Color(to_color(color)),
        BackgroundFill::LinearGradient { top, bottom } => {
            let linear = gradient::Linear::new(Radians(PI))
                .add_stop(0.0, to_color(top))
                .add_stop(1.0, to_color(bottom));
            iced::Background::Gradient(Gradient::Linear(linear))
        }
    }
}

/// Concrete text size for a semantic font style.
pub fn font_size(font: FontStyle) -> f32 {
    match font {
        FontStyle::Title => TITLE_TEXT_SIZE,
        FontStyle::Body => BODY_TEXT_SIZE,
    }
}

/// Font selection for a weight. Only the weight deviates from the default
/// font.
pub fn to_font(weight: FontWeight) -> iced::Font {
    match weight {
        FontWeight::Normal => iced::Font::DEFAULT,
        FontWeight::Bold => iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        },
    }
}

/// Container style for a styled stack: background fill, rounded corners,
/// and a soft black drop shadow with the described blur radius.
pub fn container_appearance(style: &ContainerStyle) -> container::Style {
    let shadow = match style.shadow {
        Some(shadow) => iced::Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.33),
            offset: Vector::new(0.0, 0.0),
            blur_radius: shadow.blur_radius,
        },
        None => iced::Shadow::default(),
    };

    container::Style {
        text_color: None,
        background: style.background.as_ref().map(to_background),
        border: iced::Border {
            color: iced::Color::TRANSPARENT,
            width: 0.0,
            radius: style.corner_radius.into(),
        },
        shadow,
        snap: false,
    }
}

/// Button style: the described background color and corner radius, label
/// color as the text color, same in every interaction status.
pub fn button_appearance(btn: &ActionButton) -> button::Style {
    button::Style {
        background: Some(iced::Background::Color(to_color(btn.background))),
        text_color: to_color(btn.label.color),
        border: iced::Border {
            color: iced::Color::TRANSPARENT,
            width: 0.0,
            radius: btn.corner_radius.into(),
        },
        shadow: iced::Shadow::default(),
        snap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{ContainerStyle, Shadow};

    #[test]
    fn test_color_mapping() {
        let c = to_color(Color::YELLOW);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.8, 0.0, 1.0));
    }

    #[test]
    fn test_solid_fill_maps_to_color_background() {
        match to_background(&BackgroundFill::Solid { color: Color::BLUE }) {
            iced::Background::Color(c) => assert_eq!(c, to_color(Color::BLUE)),
            other => panic!("expected a color background: {other:?}"),
        }
    }

    #[test]
    fn test_gradient_fill_maps_to_gradient_background() {
        let fill = BackgroundFill::LinearGradient {
            top: Color::PURPLE,
            bottom: Color::BLUE,
        };
        assert!(matches!(
            to_background(&fill),
            iced::Background::Gradient(Gradient::Linear(_))
        ));
    }

    #[test]
    fn test_title_reads_larger_than_body() {
        assert!(font_size(FontStyle::Title) > font_size(FontStyle::Body));
    }

    #[test]
    fn test_container_appearance_carries_radius_and_shadow() {
        let style = ContainerStyle {
            padding: 16.0,
            background: Some(BackgroundFill::Solid { color: Color::PURPLE }),
            corner_radius: 15.0,
            shadow: Some(Shadow { blur_radius: 10.0 }),
        };
        let appearance = container_appearance(&style);
        assert_eq!(appearance.border.radius, iced::border::Radius::from(15.0));
        assert_eq!(appearance.shadow.blur_radius, 10.0);
        assert!(appearance.background.is_some());
    }
}
