//! # Bienvenida GUI Application
//!
//! Single-screen iced front end for the welcome card. The card description
//! is built once at startup by `card_core` and rendered by walking the
//! tree; the application itself holds no other state.
//!
//! The window is fixed at the size the description asks for and is not
//! resizable. The only interaction is the card button, whose action is a
//! deliberate no-op.

mod ui;

use card_core::{welcome_card, Action, Window};
use iced::{Element, Size, Task};

fn main() -> iced::Result {
    let card = welcome_card();

    iced::application(App::default, App::update, App::view)
        .title("Bienvenida")
        .window(iced::window::Settings {
            size: Size::new(card.width, card.height),
            resizable: false,
            ..iced::window::Settings::default()
        })
        .run()
}

/// Application state: the static card description.
struct App {
    card: Window,
}

impl Default for App {
    fn default() -> Self {
        App {
            card: welcome_card(),
        }
    }
}

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    /// A button was pressed; carries the action to run
    Invoke(Action),
}

impl App {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Invoke(action) => {
                // Runs synchronously; Action::NoOp leaves the state untouched
                action.invoke();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        ui::card::view_card(&self.card)
    }
}
