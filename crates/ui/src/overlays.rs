use photosweep_app::App;
use photosweep_models::AccessStatus;
use photosweep_utils::format_bytes;
use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{ACCENT_COLOR, KEEP_COLOR, MUTED_COLOR, TRASH_COLOR, centered_rect};

/// Shown in place of the review screen until the library can be read.
pub fn draw_access(f: &mut Frame, area: Rect, app: &App) {
    let reason = match &app.access {
        AccessStatus::Denied(reason) => reason.as_str(),
        AccessStatus::Granted => "",
    };
    let folder = app
        .settings
        .library_folder
        .as_ref()
        .map_or_else(|| "not configured".to_string(), |p| p.display().to_string());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PhotoSweep needs access to your photo library",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Library: ", Style::default().fg(MUTED_COLOR)),
            Span::styled(folder, Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(reason.to_string(), Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" to grant access, "),
            Span::styled("q", Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" to quit"),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(panel, area.inner(Margin::new(6, 2)));
}

pub fn draw_tutorial(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to PhotoSweep",
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your newest photos come first, one card at a time."),
        Line::from(""),
        Line::from(vec![
            Span::styled("← Trash", Style::default().fg(TRASH_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw("   /   "),
            Span::styled("Keep →", Style::default().fg(KEEP_COLOR).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(ACCENT_COLOR)),
            Span::raw(" photo details"),
        ]),
        Line::from(""),
        Line::from("Nothing is deleted until you empty the trash and confirm."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];

    let tutorial = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_COLOR))
                .style(Style::default().bg(Color::Rgb(20, 20, 30))),
        );
    f.render_widget(tutorial, area);
}

pub fn draw_confirm(f: &mut Frame, app: &App) {
    let Some(request) = &app.awaiting_confirmation else {
        return;
    };

    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Permanently delete {} photos ({})?",
                request.len(),
                format_bytes(request.total_size)
            ),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("This cannot be undone.", Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(TRASH_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" delete    "),
            Span::styled("N", Style::default().fg(KEEP_COLOR).add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Empty trash ")
                .title_style(Style::default().fg(TRASH_COLOR).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(TRASH_COLOR))
                .style(Style::default().bg(Color::Rgb(20, 20, 30))),
        );
    f.render_widget(dialog, area);
}
