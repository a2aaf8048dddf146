use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Prices are shown as the raw number behind a fixed symbol, e.g. `₹500`.
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{symbol}{price}")
}

/// Grid columns for a given width, stepping up like a responsive product grid.
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        100..=139 => 3,
        _ => 5,
    }
}

pub fn grid_columns_for_terminal() -> anyhow::Result<usize> {
    let (cols, _rows) = crossterm::terminal::size()?;
    Ok(grid_columns(cols))
}

/// Centers a rectangle within another rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r)[1];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical)[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_keep_their_precision() {
        assert_eq!(format_price("₹", 500.0), "₹500");
        assert_eq!(format_price("₹", 499.5), "₹499.5");
        assert_eq!(format_price("$", 0.0), "$0");
    }

    #[test]
    fn columns_grow_with_width() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(120), 3);
        assert_eq!(grid_columns(200), 5);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 80, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }
}
