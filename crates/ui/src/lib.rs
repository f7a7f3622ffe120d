use photosweep_app::App;
use photosweep_models::{Overlay, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

mod details;
mod overlays;
mod swipe;
mod trash;

const ACCENT_COLOR: Color = Color::Rgb(139, 233, 253);
const KEEP_COLOR: Color = Color::Rgb(80, 250, 123);
const TRASH_COLOR: Color = Color::Rgb(255, 85, 85);
const MUTED_COLOR: Color = Color::Rgb(98, 114, 164);
const BORDER_COLOR: Color = Color::Rgb(60, 60, 60);

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    if !app.access.is_granted() {
        // The access screen replaces everything, pending overlays included.
        overlays::draw_access(f, chunks[1], app);
        draw_status_bar(f, chunks[2], app);
        return;
    }

    match app.screen {
        Screen::Main => swipe::draw(f, chunks[1], app),
        Screen::Trash => trash::draw(f, chunks[1], app),
    }

    draw_status_bar(f, chunks[2], app);

    match app.overlay {
        Some(Overlay::Tutorial) => overlays::draw_tutorial(f),
        Some(Overlay::Help) => draw_help_overlay(f),
        Some(Overlay::ConfirmPurge) => overlays::draw_confirm(f, app),
        Some(Overlay::Details(id)) => {
            if let (Some(photo), Some(info)) = (app.triage.find(id), app.details.as_ref()) {
                details::draw_modal(f, photo, info);
            }
        }
        None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let (icon, label, color) = match app.screen {
        _ if !app.access.is_granted() => ("🔒", "Access", Color::Yellow),
        Screen::Main => ("🖼️", "Review", ACCENT_COLOR),
        Screen::Trash => ("🗑️", "Trash", TRASH_COLOR),
    };

    let trash_badge = if app.triage.trash_len() > 0 {
        Span::styled(
            format!(" 🗑 {} ", app.triage.trash_len()),
            Style::default().fg(Color::White).bg(TRASH_COLOR).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" 🗑 0 ", Style::default().fg(MUTED_COLOR))
    };

    let title = Line::from(vec![
        Span::styled(
            " PhotoSweep ",
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("{icon} {label}"), Style::default().fg(color)),
        Span::raw("  "),
        trash_badge,
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );
    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ])
        .split(area);

    let shortcuts = match (app.access.is_granted(), app.screen) {
        (false, _) => "Enter:Grant | q:Quit",
        (true, Screen::Main) => "←:Trash | →:Keep | t:Bin | ?:Help",
        (true, Screen::Trash) => "u:Recover | D:Delete all | Esc:Back",
    };

    let left = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_COLOR)),
        );

    let center_content = if let Some(error) = &app.error_message {
        Line::from(vec![
            Span::styled("❌ ", Style::default().fg(Color::Red)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ])
    } else if app.is_purging() {
        Line::from(Span::styled(
            "⟳ Deleting photos...",
            Style::default().fg(Color::Blue).add_modifier(Modifier::SLOW_BLINK),
        ))
    } else if app.is_loading() {
        Line::from(Span::styled(
            "⟳ Scanning library...",
            Style::default().fg(Color::Blue).add_modifier(Modifier::SLOW_BLINK),
        ))
    } else if let Some(success) = &app.success_message {
        Line::from(vec![
            Span::styled("✅ ", Style::default().fg(Color::Green)),
            Span::styled(success.as_str(), Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(Span::styled("Ready", Style::default().fg(Color::Rgb(100, 100, 100))))
    };

    let center = Paragraph::new(center_content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    let stats = format!(
        "Left: {} | Trash: {}",
        app.triage.active().len(),
        app.triage.trash_len()
    );
    let right = Paragraph::new(stats)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_COLOR)),
        );

    f.render_widget(left, chunks[0]);
    f.render_widget(center, chunks[1]);
    f.render_widget(right, chunks[2]);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let key = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), Style::default().fg(ACCENT_COLOR)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("Review"),
        key("← h x", "Mark photo for deletion"),
        key("→ l k", "Keep photo"),
        key("Enter Space", "Photo details"),
        key("t", "Open trash"),
        key("r", "Rescan library"),
        Line::from(""),
        section("Trash"),
        key("↑ ↓ j k", "Select photo"),
        key("u r", "Recover photo"),
        key("D", "Permanently delete everything in the trash"),
        key("Esc b q", "Back to review"),
        Line::from(""),
        section("General"),
        key("?", "Toggle help"),
        key("q  Ctrl-C", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_COLOR))
            .style(Style::default().bg(Color::Rgb(20, 20, 30))),
    );
    f.render_widget(help, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod test_support;
