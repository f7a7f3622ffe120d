use photosweep_app::App;
use photosweep_models::PhotoItem;
use photosweep_utils::{datetime::format_added, format_bytes};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{ACCENT_COLOR, KEEP_COLOR, MUTED_COLOR, TRASH_COLOR};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let background = Block::default().style(Style::default().bg(Color::Rgb(24, 24, 37)));
    f.render_widget(background, area);

    if app.triage.is_empty() {
        draw_empty(f, area, app);
        return;
    }

    let visible = app.triage.visible();
    let remaining = app.triage.active().len();
    let card_area = area.inner(Margin::new(6, 2));

    // Back to front, so the current photo is drawn last and sits on top.
    for (depth, photo) in visible.iter().enumerate().rev() {
        #[allow(clippy::cast_possible_truncation)]
        let offset = depth as u16 * 2;
        let rect = Rect {
            x: card_area.x + offset,
            y: card_area.y + offset,
            width: card_area.width.saturating_sub(offset * 2),
            height: card_area.height.saturating_sub(2),
        };
        f.render_widget(Clear, rect);
        if depth == 0 {
            draw_front_card(f, rect, photo, remaining);
        } else {
            draw_back_card(f, rect, photo);
        }
    }
}

fn draw_front_card(f: &mut Frame, area: Rect, photo: &PhotoItem, remaining: usize) {
    let block = Block::default()
        .title(format!(" 1 / {remaining} "))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_COLOR))
        .style(Style::default().bg(Color::Rgb(30, 30, 46)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    let info = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🖼️  {}", photo.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Added {}", format_added(&photo.added)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(format_bytes(photo.size), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            photo.location.display().to_string(),
            Style::default().fg(MUTED_COLOR),
        )),
    ];
    f.render_widget(
        Paragraph::new(info).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let hints = Line::from(vec![
        Span::styled("◀ Trash", Style::default().fg(TRASH_COLOR).add_modifier(Modifier::BOLD)),
        Span::styled("      Enter: details      ", Style::default().fg(MUTED_COLOR)),
        Span::styled("Keep ▶", Style::default().fg(KEEP_COLOR).add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[1]);
}

fn draw_back_card(f: &mut Frame, area: Rect, photo: &PhotoItem) {
    let block = Block::default()
        .title_bottom(format!(" next: {} ", photo.name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED_COLOR));
    f.render_widget(block, area);
}

fn draw_empty(f: &mut Frame, area: Rect, app: &App) {
    let trash_len = app.triage.trash_len();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🧹", Style::default().fg(MUTED_COLOR))),
        Line::from(""),
        Line::from(Span::styled(
            "All photos reviewed!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{trash_len} photos in the trash waiting to be deleted"),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("t", Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" open trash    "),
            Span::styled("r", Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" rescan library"),
        ]),
    ];

    let empty = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED_COLOR)),
    );
    f.render_widget(empty, area.inner(Margin::new(6, 2)));
}
