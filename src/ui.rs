use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Route};
use crate::carousel::SlidePhase;
use crate::home::HomePage;
use crate::models::{FocusArea, LoadState, Product};
use crate::network::ProductSource;
use crate::theme::Theme;
use crate::utils::{centered_rect, format_price, grid_columns};

pub const STORE_TITLE: &str = "Evol8 Products";
const SLIDESHOW_HEIGHT: u16 = 9;
const CARD_HEIGHT: u16 = 4;

pub fn draw<S: ProductSource>(f: &mut Frame, app: &App<S>, theme: &Theme, now: Instant) {
    let [nav_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(f.area());

    render_navbar(f, nav_area, theme);

    match (app.route(), app.home()) {
        (Route::Home, Some(home)) => render_home(f, body_area, home, &app.currency_symbol, theme, now),
        (Route::Login, _) => render_placeholder(f, body_area, "Login", theme),
        (Route::Register, _) => render_placeholder(f, body_area, "Register", theme),
        (Route::Home, None) => {}
    }

    render_footer(f, footer_area, app, theme);

    if let Some(product) = app.home().and_then(|home| home.selection().get()) {
        render_detail(f, product, &app.currency_symbol, theme);
    }
}

fn render_navbar(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme.blurred_border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [title_area, link_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(14)]).areas(inner);
    f.render_widget(Paragraph::new(STORE_TITLE).style(theme.brand), title_area);
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(" Login ", theme.nav_link), Span::raw(" [L]")]))
            .alignment(Alignment::Right),
        link_area,
    );
}

fn render_home(f: &mut Frame, area: Rect, home: &HomePage, symbol: &str, theme: &Theme, now: Instant) {
    match home.load_state() {
        LoadState::Loading => {
            let [slide_area, grid_area] =
                Layout::vertical([Constraint::Length(SLIDESHOW_HEIGHT), Constraint::Min(1)]).areas(area);
            render_loading(f, slide_area, theme);
            render_loading(f, grid_area, theme);
        }
        LoadState::Ready if !home.products().is_empty() => {
            let [slide_area, grid_area] =
                Layout::vertical([Constraint::Length(SLIDESHOW_HEIGHT), Constraint::Min(1)]).areas(area);
            render_slideshow(f, slide_area, home, theme, now);
            render_grid(f, grid_area, home, symbol, theme);
        }
        // no slideshow region without products
        LoadState::Ready | LoadState::Failed => {
            let para = Paragraph::new("No products available.")
                .block(Block::default().title("Products").borders(Borders::ALL))
                .alignment(Alignment::Center)
                .style(theme.placeholder);
            f.render_widget(para, area);
        }
    }
}

fn render_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let para = Paragraph::new("Loading products...")
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.blurred_border)))
        .alignment(Alignment::Center)
        .style(theme.placeholder);
    f.render_widget(para, area);
}

fn border_for(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.focus_border).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.blurred_border)
    }
}

fn render_slideshow(f: &mut Frame, area: Rect, home: &HomePage, theme: &Theme, now: Instant) {
    let slides = home.slides();
    let Some(phase) = slides.phase_at(now) else {
        return;
    };
    let (index, fading) = match phase {
        SlidePhase::Leaving(i) => (i, true),
        SlidePhase::Entering(i) | SlidePhase::Settled(i) => (i, false),
    };
    let Some(product) = slides.items().get(index) else {
        return;
    };

    let title = format!("Slide {}/{}", index + 1, slides.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_for(home.focus() == FocusArea::Slideshow, theme));

    let (name_style, image_style) = if fading {
        (theme.slide_fading, theme.slide_fading)
    } else {
        (theme.slide_title, theme.slide_image)
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(product.name.clone(), name_style)),
        Line::from(""),
        Line::from(Span::styled(product.image_url.clone(), image_style)),
        Line::from(""),
        Line::from(Span::styled("‹ ←   Enter: details   → ›", Style::default().fg(theme.text_secondary))),
    ];
    let para = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn render_grid(f: &mut Frame, area: Rect, home: &HomePage, symbol: &str, theme: &Theme) {
    let block = Block::default()
        .title("Products")
        .borders(Borders::ALL)
        .border_style(border_for(home.focus() == FocusArea::Grid, theme));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let products = home.products();
    let columns = grid_columns(area.width);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let cursor = home.grid_cursor().unwrap_or(0);
    let first_row = (cursor / columns).saturating_sub(visible_rows - 1);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
    for (r, row_area) in rows.iter().enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (c, cell_area) in cells.iter().enumerate() {
            let index = (first_row + r) * columns + c;
            let Some(product) = products.get(index) else {
                return;
            };
            let selected = home.focus() == FocusArea::Grid && index == cursor;
            render_card(f, *cell_area, product, symbol, selected, theme);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, product: &Product, symbol: &str, selected: bool, theme: &Theme) {
    let (style, marker) = if selected { (theme.card_selected, "→ ") } else { (theme.card, "  ") };
    let lines = vec![
        Line::from(Span::styled(format!("{marker}{}", product.name), style)),
        Line::from(Span::styled(format!("  {}", format_price(symbol, product.price)), theme.price)),
    ];
    let block = Block::default().borders(Borders::ALL).border_style(if selected {
        Style::default().fg(theme.focus_border)
    } else {
        Style::default().fg(theme.blurred_border)
    });
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_placeholder(f: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("{title} is not available yet."), theme.popup_title)),
        Line::from(""),
        Line::from(Span::styled("Press H to go back to the products.", theme.placeholder)),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn render_detail(f: &mut Frame, product: &Product, symbol: &str, theme: &Theme) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(product.name.clone(), theme.popup_title))
        .title_bottom(Line::from(" Esc close · c copy image URL ").right_aligned())
        .borders(Borders::ALL)
        .style(theme.popup_border);
    let lines = vec![
        Line::from(Span::styled(product.image_url.clone(), theme.slide_image)),
        Line::from(""),
        Line::from(Span::styled(product.description.clone(), theme.popup_text)),
        Line::from(""),
        Line::from(Span::styled(format_price(symbol, product.price), theme.price)),
    ];
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_footer<S: ProductSource>(f: &mut Frame, area: Rect, app: &App<S>, theme: &Theme) {
    let hints = match app.route() {
        Route::Home => "←/→ slide | Tab focus | ↑/↓/h/j/k/l grid | Enter details | Esc close | L login | R register | q quit",
        Route::Login | Route::Register => "H home | L login | R register | q quit",
    };
    let text = match &app.status {
        Some(status) => format!("{hints} | {status}"),
        None => hints.to_string(),
    };
    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL)).style(theme.footer);
    f.render_widget(footer, area);
}
