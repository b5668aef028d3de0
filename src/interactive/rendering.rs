//! TUI rendering with ratatui
//!
//! Layout for the lookup screen and the help dialog.

use super::app::App;
use crate::core::{QueryMode, SearchResult};
use crate::output::formatters::{format_definition, mode_selector};
use crate::view::View;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Results
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_results(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRABBLED")
        .style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::LightRed)),
        );
    f.render_widget(header, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let state = app.controller.state();
    let title = state.descriptor().map_or_else(
        || " Results ".to_string(),
        |d| format!(" Results for '{}' ({}) ", d.text(), d.mode().label()),
    );

    let lines = match app.view() {
        View::Loading => vec![Line::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )],
        View::Error(message) => vec![Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ])],
        View::Results([]) => vec![Line::styled(
            "No data...",
            Style::default().fg(Color::Yellow),
        )],
        View::Results(results) => result_lines(results, app.show_definitions),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn result_lines(results: &[SearchResult], show_definitions: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(results.len());

    for (i, result) in results.iter().enumerate() {
        let definition = format_definition(&result.definition);
        let mut spans = vec![
            Span::styled(
                format!("{:>3}: ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("🟫 "),
            Span::styled(
                result.word.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if show_definitions && !definition.summary.is_empty() {
            spans.push(Span::raw(format!(" : {}", definition.summary)));
        }
        lines.push(Line::from(spans));

        if show_definitions {
            for sense in definition.senses {
                lines.push(Line::from(vec![
                    Span::raw("        "),
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(sense.to_string()),
                ]));
            }
        }
    }

    lines
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Letters | Mode: {} ", mode_selector(app.controller.mode()));
    let input = Paragraph::new(app.controller.input().to_string())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(input, area);

    // Cursor sits after the typed text, inside the border
    let typed = app.controller.input().chars().count() as u16;
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    f.set_cursor_position((x, area.y + 1));
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let activity = if app.controller.state().is_pending() {
        Span::styled("⏳ searching  ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    };
    let definitions = if app.show_definitions { "hide" } else { "show" };
    let help = Span::styled(
        format!(
            "Enter: Search | Tab: Mode | F1: Help | Ctrl-d: {definitions} definitions | Esc: Quit"
        ),
        Style::default().fg(Color::DarkGray),
    );

    let status = Paragraph::new(Line::from(vec![activity, help])).alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 64, 14);

    let mut lines = vec![
        Line::from("Type some letters, pick a mode with Tab, press Enter."),
        Line::from(""),
    ];
    for mode in QueryMode::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<9}", mode.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(mode.describe()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Pattern example: c_t finds cat, cot and cut."));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    ));

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" HOW I WORK ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

/// Rectangle of at most `width` x `height` centred in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
