use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text_secondary: Color,

    pub brand: Style,
    pub nav_link: Style,
    pub slide_title: Style,
    pub slide_image: Style,
    pub slide_fading: Style,
    pub card: Style,
    pub card_selected: Style,
    pub price: Style,
    pub placeholder: Style,
    pub footer: Style,
    pub popup_title: Style,
    pub popup_border: Style,
    pub popup_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text_secondary: Color::Gray,

            brand: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            nav_link: Style::default().fg(Color::White).bg(Color::Rgb(79, 70, 229)).add_modifier(Modifier::BOLD),
            slide_title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            slide_image: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            slide_fading: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            card: Style::default().fg(Color::White),
            card_selected: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            price: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            popup_title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            popup_border: Style::default().fg(Color::Magenta).bg(Color::Black),
            popup_text: Style::default().fg(Color::White),
        }
    }
}
