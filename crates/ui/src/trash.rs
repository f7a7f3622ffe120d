use photosweep_app::App;
use photosweep_utils::{datetime::format_added, format_bytes};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::{ACCENT_COLOR, MUTED_COLOR, TRASH_COLOR};

pub fn draw(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary
            Constraint::Min(3),    // Marked photos
            Constraint::Length(3), // Help
        ])
        .split(area);

    draw_summary(f, chunks[0], app);

    if app.triage.trashed().is_empty() {
        let empty = Paragraph::new("Nothing marked for deletion")
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED_COLOR))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(empty, chunks[1]);
    } else {
        draw_list(f, chunks[1], app);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(ACCENT_COLOR)),
        Span::raw(" select  "),
        Span::styled("u", Style::default().fg(ACCENT_COLOR)),
        Span::raw(" recover  "),
        Span::styled("Enter", Style::default().fg(ACCENT_COLOR)),
        Span::raw(" details  "),
        Span::styled("D", Style::default().fg(TRASH_COLOR).add_modifier(Modifier::BOLD)),
        Span::raw(" delete all permanently  "),
        Span::styled("Esc", Style::default().fg(ACCENT_COLOR)),
        Span::raw(" back"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Gray)));
    f.render_widget(help, chunks[2]);
}

fn draw_summary(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!("{} photos marked for deletion", app.triage.trash_len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(format_bytes(app.triage.trash_size()), Style::default().fg(TRASH_COLOR)),
    ];
    if app.triage.purge_pending() {
        spans.push(Span::styled("  ·  deleting...", Style::default().fg(Color::Yellow)));
    }

    let summary = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TRASH_COLOR)),
    );
    f.render_widget(summary, area);
}

fn draw_list(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .triage
        .trashed()
        .iter()
        .map(|photo| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<40}", photo.name), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>10}", format_bytes(photo.size)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("   {}", format_added(&photo.added)),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Trash ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED_COLOR)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(68, 71, 90)).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.trash_list_state);
}
