use crate::app::BrowserView;
use crate::config::AppConfig;
use crate::domain::FileEntry;
use crate::format::{humanize_bytes, permission_string};
use crate::viewport::SelectionViewport;
use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Span, Style};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use std::time::SystemTime;

const DIR_LABEL: &str = "📁";
const FILE_LABEL: &str = "  ";
const SIZE_WIDTH: u16 = 9;
const MODE_WIDTH: u16 = 9;

pub fn draw(frame: &mut Frame, view: &BrowserView<'_>, config: &AppConfig) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(config.header_rows),
            Constraint::Min(1),
            Constraint::Length(config.footer_rows),
        ])
        .split(frame.area());

    draw_header(frame, view, outer[0]);
    draw_listing(frame, view, config, outer[1]);
    draw_footer(frame, view, config, outer[2]);
}

fn draw_header(frame: &mut Frame, view: &BrowserView<'_>, area: Rect) {
    let path = Line::from(Span::styled(
        view.cursor.current().display().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(path), area);
}

fn draw_listing(frame: &mut Frame, view: &BrowserView<'_>, config: &AppConfig, area: Rect) {
    if view.listing.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "  (empty directory)",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(placeholder, area);
        return;
    }

    let start = view.viewport.visible_start();
    let range = view.viewport.visible_range();
    let visible = &view.listing.entries()[range];

    let times: Vec<String> = visible
        .iter()
        .map(|entry| format_time(entry.modified_at, &config.time_format))
        .collect();
    let time_width = times
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(1)
        .min(u16::MAX as usize) as u16;

    let rows: Vec<Row> = visible
        .iter()
        .zip(times)
        .map(|(entry, time)| {
            let mut cells = vec![
                Cell::from(name_cell(entry)),
                Cell::from(Line::from(size_cell(entry)).alignment(Alignment::Right)),
                Cell::from(time),
            ];
            if config.show_permissions {
                cells.push(Cell::from(permission_string(entry.mode)));
            }
            let style = if entry.is_dir {
                Style::default().fg(Color::LightBlue)
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![
        Constraint::Fill(1),
        Constraint::Length(SIZE_WIDTH),
        Constraint::Length(time_width),
    ];
    if config.show_permissions {
        widths.push(Constraint::Length(MODE_WIDTH));
    }

    let table = Table::new(rows, widths)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(138, 43, 226))
                .add_modifier(Modifier::BOLD),
        );

    let mut state =
        TableState::default().with_selected(Some(view.viewport.selected().saturating_sub(start)));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_footer(frame: &mut Frame, view: &BrowserView<'_>, config: &AppConfig, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    if let Some(status) = view.status {
        let line = Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), rows[0]);
    }

    let position = position_text(view.viewport);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(position.chars().count() as u16),
        ])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            help_text(config.ascii_arrows, view.cursor.home().is_some()),
            Style::default().fg(Color::Gray),
        ))),
        bottom[0],
    );
    frame.render_widget(
        Paragraph::new(position).alignment(Alignment::Right),
        bottom[1],
    );
}

fn name_cell(entry: &FileEntry) -> String {
    let label = if entry.is_dir { DIR_LABEL } else { FILE_LABEL };
    let link = if entry.is_symlink { " ->" } else { "" };
    format!("{label} {}{link}", entry.name)
}

fn size_cell(entry: &FileEntry) -> String {
    if entry.is_dir {
        "-".to_string()
    } else {
        humanize_bytes(entry.size_bytes)
    }
}

fn format_time(modified_at: Option<SystemTime>, format: &str) -> String {
    match modified_at {
        Some(time) => DateTime::<Local>::from(time).format(format).to_string(),
        None => "-".to_string(),
    }
}

fn help_text(ascii_arrows: bool, home_available: bool) -> String {
    let (left, right) = if ascii_arrows { ('<', '>') } else { ('←', '→') };
    let home = if home_available { "  [h] home" } else { "" };
    format!("[ESC] quit  [{left}] up  [{right}] open{home}  [b] back")
}

fn position_text(viewport: &SelectionViewport) -> String {
    format!("({}/{})", viewport.selected(), viewport.entry_count())
}
