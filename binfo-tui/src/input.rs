use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run the agent on the current input line.
    Submit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, PageDown, PageUp, Up};

    // Global quit shortcuts. Plain letters stay available for typing.
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Esc {
        return Action::Quit;
    }

    match key.code {
        Char(character) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                app.input.push(character);
            }
            Action::None
        }
        Backspace => {
            app.input.pop();
            Action::None
        }
        Enter => Action::Submit,
        Up | PageUp => {
            app.scroll_up();
            Action::None
        }
        Down | PageDown => {
            app.scroll_down();
            Action::None
        }
        _ => Action::None,
    }
}
