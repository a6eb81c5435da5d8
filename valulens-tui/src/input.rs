//! Keyboard input dispatch — overlays first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::TickerPrompt => {
            handle_prompt(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('s') | KeyCode::Char('/') => {
            if app.in_flight {
                app.set_warning("Analysis already running");
            } else {
                app.ticker_input.clear();
                app.overlay = Overlay::TickerPrompt;
            }
        }
        KeyCode::Char(c @ '1'..='8') => {
            if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                switch_panel(app, panel);
            }
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                switch_panel(app, app.active_panel.prev());
            } else {
                switch_panel(app, app.active_panel.next());
            }
        }
        KeyCode::BackTab => {
            switch_panel(app, app.active_panel.prev());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll = app.scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll = app.scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.scroll = 0;
        }
        _ => {}
    }
}

fn switch_panel(app: &mut AppState, panel: Panel) {
    if app.active_panel != panel {
        app.active_panel = panel;
        app.scroll = 0;
    }
}

fn handle_prompt(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.ticker_input.clear();
        }
        KeyCode::Enter => {
            app.overlay = Overlay::None;
            app.submit_ticker();
            app.ticker_input.clear();
        }
        KeyCode::Backspace => {
            app.ticker_input.pop();
        }
        KeyCode::Char(c) => {
            app.ticker_input.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::WorkerCommand;
    use std::sync::mpsc;

    fn test_app() -> (AppState, mpsc::Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx), cmd_rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn prompt_collects_submits_and_closes() {
        let (mut app, cmd_rx) = test_app();

        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.overlay, Overlay::TickerPrompt);

        for c in "aapl".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.overlay, Overlay::None);
        assert!(app.in_flight);
        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::Analyze { ticker, .. } => assert_eq!(ticker, "AAPL"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn prompt_refused_while_in_flight() {
        let (mut app, _cmd_rx) = test_app();
        app.in_flight = true;

        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn escape_cancels_the_prompt() {
        let (mut app, cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));

        assert_eq!(app.overlay, Overlay::None);
        assert!(app.ticker_input.is_empty());
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn digit_keys_switch_panels_and_reset_scroll() {
        let (mut app, _cmd_rx) = test_app();
        app.scroll = 12;

        handle_key(&mut app, press(KeyCode::Char('7')));
        assert_eq!(app.active_panel, Panel::Chart);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let (mut app, _cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
