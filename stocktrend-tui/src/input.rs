//! Keyboard input dispatch: global keys → focused form control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Field, Tab};

const PAGE: isize = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = app.form.focus.next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = app.form.focus.prev();
            return;
        }
        KeyCode::Enter => {
            app.submit();
            return;
        }
        KeyCode::F(1) => {
            app.tab = Tab::PriceChart;
            return;
        }
        KeyCode::F(2) => {
            app.tab = Tab::RawData;
            return;
        }
        KeyCode::PageDown => {
            app.scroll_table(PAGE);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_table(-PAGE);
            return;
        }
        _ => {}
    }

    // 2. Focused control.
    let focus = app.form.focus;
    if focus.is_text() {
        handle_text_key(app, focus, key);
    } else {
        handle_button_key(app, key);
    }
}

fn handle_text_key(app: &mut AppState, field: Field, key: KeyEvent) {
    let Some(value) = app.form.field_mut(field) else {
        return;
    };

    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            value.clear();
        }
        // Control and Alt chords are shortcuts, never text.
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            value.push(c);
        }
        KeyCode::Backspace => {
            if value.pop().is_none() {
                return;
            }
        }
        _ => return,
    }

    app.inputs_changed();
}

fn handle_button_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') => app.submit(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('[') | KeyCode::Char(']') | KeyCode::Left | KeyCode::Right => {
            app.tab = app.tab.toggle();
        }
        KeyCode::Char('j') => app.scroll_table(1),
        KeyCode::Char('k') => app.scroll_table(-1),
        KeyCode::Char('g') => app.table_scroll = 0,
        _ => {}
    }
}
