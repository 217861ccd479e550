use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(stats_line(app), rows[0]);
    frame.render_widget(hint_line(app), rows[1]);
    frame.render_widget(keys_line(), rows[2]);
}

fn stats_line(app: &App) -> Paragraph<'static> {
    let text = match &app.stats {
        Some(stats) => format!(
            "{} Suchanfragen | {} Posts | {} Kommentare | {:.1} GiB Index",
            format_count(stats.submitted_searches()),
            format_count(stats.entries.image_posts),
            format_count(stats.entries.comments),
            stats.database_gib(),
        ),
        None => String::new(),
    };
    Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
}

fn hint_line(app: &App) -> Paragraph<'static> {
    if app.failed {
        return Paragraph::new(Line::from(crate::app::FAILURE_BANNER)).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
    }
    Paragraph::new(app.current_hint()).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

fn keys_line() -> Paragraph<'static> {
    Paragraph::new("Enter: Suche | Ctrl+P: mehr Posts | Ctrl+K: mehr Kommentare | Esc: beenden")
        .style(Style::default().fg(Color::DarkGray))
}

/// Thousands separator, German style: 3100000 -> "3.100.000".
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
