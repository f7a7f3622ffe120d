use photosweep_core::PhotoDetails;
use photosweep_models::PhotoItem;
use photosweep_utils::{datetime::format_added, format_bytes};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table},
};

use crate::{ACCENT_COLOR, MUTED_COLOR, TRASH_COLOR, centered_rect};

pub fn draw_modal(f: &mut Frame, photo: &PhotoItem, info: &PhotoDetails) {
    let area = centered_rect(70, 50, f.area());
    f.render_widget(Clear, area);

    let dimensions = info
        .dimensions
        .map_or_else(|| "unknown".to_string(), |(w, h)| format!("{w} × {h}"));

    let mut rows = vec![
        detail_row("Name", photo.name.to_string()),
        detail_row("Location", photo.location.display().to_string()),
        detail_row("Size", format!("{} ({} bytes)", format_bytes(photo.size), photo.size)),
        detail_row("Added", format_added(&photo.added)),
        detail_row("Dimensions", dimensions),
        detail_row("Id", photo.id.to_string()),
    ];
    if !info.exists {
        rows.push(
            Row::new(vec![
                Cell::from("Status"),
                Cell::from("missing on disk"),
            ])
            .style(Style::default().fg(TRASH_COLOR)),
        );
    }

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(20)])
        .block(
            Block::default()
                .title(" Photo details ")
                .title_style(Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD))
                .title_bottom(" Esc to close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_COLOR))
                .style(Style::default().bg(Color::Rgb(20, 20, 30))),
        )
        .column_spacing(2);
    f.render_widget(table, area);
}

fn detail_row(label: &'static str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(label).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(value).style(Style::default().fg(Color::White)),
    ])
}
