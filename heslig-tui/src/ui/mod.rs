use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

mod footer;
mod results;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_search_bar(frame, root[0], app);
    results::render(frame, root[1], app);
    footer::render(frame, root[2], app);
}

fn render_search_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let input_line = Line::from(vec![
        Span::raw(app.query_input.as_str()),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]);
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suche (Enter) "),
    );
    frame.render_widget(input, area);

    // Spinner in the top-right corner of the input box while any request
    // is outstanding.
    if app.is_loading() && area.width > 4 {
        let throbber_area = ratatui::layout::Rect {
            x: area.x + area.width - 3,
            y: area.y + 1,
            width: 1,
            height: 1,
        };
        let throbber = throbber_widgets_tui::Throbber::default()
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    }
}
