use arboard::Clipboard;
use crossterm::event::KeyCode;
use tracing::warn;

use crate::app::{App, Route};
use crate::models::FocusArea;
use crate::network::ProductSource;

/// Applies one key press. Returns `false` when the app should quit.
pub fn handle_key<S: ProductSource>(key: KeyCode, app: &mut App<S>, grid_columns: usize) -> bool {
    match key {
        KeyCode::Char('q') => return false,
        KeyCode::Char('L') => app.navigate(Route::Login),
        KeyCode::Char('R') => app.navigate(Route::Register),
        KeyCode::Char('H') => app.navigate(Route::Home),
        _ => {}
    }

    if app.home().is_none() {
        if key == KeyCode::Esc {
            app.navigate(Route::Home);
        }
        return true;
    }
    let Some(home) = app.home_mut() else {
        return true;
    };

    // popup swallows everything but its own keys
    if let Some(url) = home.selection().get().map(|p| p.image_url.clone()) {
        let mut status = None;
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => home.close_detail(),
            KeyCode::Char('c') => {
                status = Some(match copy_to_clipboard(&url) {
                    Ok(()) => "Image URL copied".to_string(),
                    Err(e) => {
                        warn!(error = %e, "clipboard unavailable");
                        "Clipboard unavailable".to_string()
                    }
                });
            }
            _ => {}
        }
        // the copy message only lives as long as the popup key that produced it
        app.status = status;
        return true;
    }

    match key {
        KeyCode::Tab | KeyCode::BackTab => home.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => match home.focus() {
            FocusArea::Slideshow => home.open_current_slide(),
            FocusArea::Grid => home.open_grid_item(),
        },
        KeyCode::Left | KeyCode::Char('h') => match home.focus() {
            FocusArea::Slideshow => home.prev_slide(),
            FocusArea::Grid => home.grid_left(),
        },
        KeyCode::Right | KeyCode::Char('l') => match home.focus() {
            FocusArea::Slideshow => home.next_slide(),
            FocusArea::Grid => home.grid_right(),
        },
        KeyCode::Up | KeyCode::Char('k') => {
            if home.focus() == FocusArea::Grid {
                home.grid_up(grid_columns);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if home.focus() == FocusArea::Grid {
                home.grid_down(grid_columns);
            }
        }
        _ => {}
    }
    true
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    Clipboard::new()?.set_text(text.to_owned())
}
