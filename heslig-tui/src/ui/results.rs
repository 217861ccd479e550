use crate::api::dto::{CommentHit, PostHit};
use crate::app::{App, PanelState, FAILURE_BANNER};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub(super) fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_posts(frame, columns[0], &app.posts);
    render_comments(frame, columns[1], &app.comments);
}

fn panel_block(title: String, more_hint: Option<&str>) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    match more_hint {
        Some(hint) => block.title_bottom(
            Line::from(format!(" {} ", hint)).style(Style::default().fg(Color::Yellow)),
        ),
        None => block,
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str, style: Style) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_posts(frame: &mut Frame, area: Rect, panel: &PanelState<PostHit>) {
    match panel {
        PanelState::Idle => render_placeholder(
            frame,
            area,
            " Posts ",
            "Noch keine Suche.",
            Style::default().fg(Color::DarkGray),
        ),
        PanelState::Loading => render_placeholder(
            frame,
            area,
            " Posts ",
            "Suche läuft...",
            Style::default().fg(Color::Yellow),
        ),
        PanelState::Failed => render_placeholder(
            frame,
            area,
            " Posts ",
            FAILURE_BANNER,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        PanelState::Loaded {
            results,
            loading_more,
        } => {
            let title = format!(" {} Posts von {} ", results.hits.len(), results.total);
            let more_hint = if *loading_more {
                Some("lädt...")
            } else if results.has_more() {
                Some("Mehr Posts zeigen: Ctrl+P")
            } else {
                None
            };

            let items: Vec<ListItem> = results.hits.iter().map(post_item).collect();
            let list = List::new(items).block(panel_block(title, more_hint));
            frame.render_widget(list, area);
        }
    }
}

fn render_comments(frame: &mut Frame, area: Rect, panel: &PanelState<CommentHit>) {
    match panel {
        PanelState::Idle => render_placeholder(
            frame,
            area,
            " Kommentare ",
            "Noch keine Suche.",
            Style::default().fg(Color::DarkGray),
        ),
        PanelState::Loading => render_placeholder(
            frame,
            area,
            " Kommentare ",
            "Suche läuft...",
            Style::default().fg(Color::Yellow),
        ),
        PanelState::Failed => render_placeholder(
            frame,
            area,
            " Kommentare ",
            FAILURE_BANNER,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        PanelState::Loaded {
            results,
            loading_more,
        } => {
            let title = format!(" {} Kommentare von {} ", results.hits.len(), results.total);
            let more_hint = if *loading_more {
                Some("lädt...")
            } else if results.has_more() {
                Some("Mehr Kommentare zeigen: Ctrl+K")
            } else {
                None
            };

            let items: Vec<ListItem> = results.hits.iter().map(comment_item).collect();
            let list = List::new(items).block(panel_block(title, more_hint));
            frame.render_widget(list, area);
        }
    }
}

/// Thumbnails cannot be shown inline, so every post gets its content
/// rating label instead.
fn post_item(hit: &PostHit) -> ListItem<'static> {
    let flag_color = match hit.sfw_flag.as_str() {
        "1" => Color::Green,
        "8" => Color::Cyan,
        _ => Color::Red,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("[{:>4}] ", hit.sfw_label()),
            Style::default().fg(flag_color),
        ),
        Span::raw(format!("von {} ", hit.author)),
        Span::styled(
            format!("({}↑ {}↓) ", hit.up, hit.down),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(hit.permalink(), Style::default().fg(Color::Blue)),
    ]);
    ListItem::new(line)
}

fn comment_item(hit: &CommentHit) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::raw(format!("{} beim Post {} ", hit.author, hit.post_id)),
        Span::styled(
            format!("mit ca. {} Benis ", hit.benis()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(hit.permalink(), Style::default().fg(Color::Blue)),
    ]);
    ListItem::new(line)
}
