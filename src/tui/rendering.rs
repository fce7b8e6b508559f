use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, Wrap,
    },
    Frame,
};

use super::app::App;
use super::models::{ConfigInputMode, FeedbackLevel, ProcessingStatus};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_folders(f, chunks[1], app);
    render_options(f, chunks[2], app);
    render_main_panel(f, chunks[3], app);
    render_status_bar(f, chunks[4], app);

    if app.show_help {
        render_help_popup(f);
    }
}

fn field_style(active: bool) -> (Style, Style) {
    if active {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default().fg(Color::White), Style::default().fg(Color::Gray))
    }
}

fn text_field<'a>(title: String, value: &'a str, active: bool) -> Paragraph<'a> {
    let (text_style, border_style) = field_style(active);
    Paragraph::new(value).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.finished {
        "Rollover! - Done"
    } else {
        "Rollover! - Rename a bunch of files in bulk"
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

pub fn render_folders(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let input = text_field(
        "Input Folder (Enter to load)".to_string(),
        &app.input_folder_input,
        app.config_input_mode == ConfigInputMode::InputFolder,
    );
    f.render_widget(input, chunks[0]);

    let output = text_field(
        "Output Folder (Enter to set)".to_string(),
        &app.output_folder_input,
        app.config_input_mode == ConfigInputMode::OutputFolder,
    );
    f.render_widget(output, chunks[1]);
}

pub fn render_options(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let year = text_field(
        format!("{} Replace Year (Ctrl-Y)", checkbox(app.use_year)),
        &app.year_input,
        app.config_input_mode == ConfigInputMode::Year,
    );
    f.render_widget(year, chunks[0]);

    let suffix = text_field(
        format!("{} Add Suffix (Ctrl-S)", checkbox(app.use_suffix)),
        &app.suffix_input,
        app.config_input_mode == ConfigInputMode::Suffix,
    );
    f.render_widget(suffix, chunks[1]);
}

pub fn render_main_panel(f: &mut Frame, area: Rect, app: &App) {
    let chunks = if app.show_preview {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(area)
    };

    render_file_list(f, chunks[0], app);

    if app.show_preview && chunks.len() > 1 {
        render_preview_panel(f, chunks[1], app);
    }
}

pub fn render_file_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            let (arrow, color) = match (&file.status, &file.proposed) {
                (ProcessingStatus::Skipped, _) => ("skipped".to_string(), Color::DarkGray),
                (ProcessingStatus::Pending, Some(proposed)) => {
                    (format!("-> {}", proposed), Color::Green)
                }
                (ProcessingStatus::Pending, None) => (String::new(), Color::Gray),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", checkbox(file.selected)),
                    Style::default().fg(if file.selected { Color::Yellow } else { Color::Gray }),
                ),
                Span::styled(file.name.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(arrow, Style::default().fg(color)),
            ]))
        })
        .collect();

    let (_, border_style) = field_style(app.config_input_mode == ConfigInputMode::Files);
    let title = format!(
        "Files ({} selected, {} prepared)",
        app.files.iter().filter(|file| file.selected).count(),
        app.prepared
    );

    let files_list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(files_list, area, &mut app.list_state.clone());

    if app.files.len() > area.height.saturating_sub(2) as usize {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("^"))
            .end_symbol(Some("v"));

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut app.scroll_state.clone(),
        );
    }
}

pub fn render_preview_panel(f: &mut Frame, area: Rect, app: &App) {
    let Some(file) = app.list_state.selected().and_then(|i| app.files.get(i)) else {
        let empty = Paragraph::new("Load an input folder to see a preview")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title("Preview").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let original = Paragraph::new(Text::from(vec![
        Line::from("Original:"),
        Line::from(Span::styled(file.name.clone(), Style::default().fg(Color::Red))),
    ]))
    .block(
        Block::default()
            .title("Before")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(original, chunks[0]);

    let after = match (&file.proposed, &file.status) {
        (Some(proposed), _) => Span::styled(proposed.clone(), Style::default().fg(Color::Green)),
        (None, ProcessingStatus::Skipped) if file.selected => Span::styled(
            "Skipped: the target already exists in the output folder",
            Style::default().fg(Color::Yellow),
        ),
        (None, ProcessingStatus::Skipped) => {
            Span::styled("Not selected", Style::default().fg(Color::Gray))
        }
        (None, ProcessingStatus::Pending) => Span::styled(
            "Choose an output folder to see the new name",
            Style::default().fg(Color::Gray),
        ),
    };

    let new = Paragraph::new(Text::from(vec![Line::from("New:"), Line::from(after)]))
        .block(
            Block::default()
                .title("After")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(new, chunks[1]);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let (text, color) = match &app.feedback {
        Some(feedback) => {
            let color = match feedback.level {
                FeedbackLevel::Info => Color::Cyan,
                FeedbackLevel::Warning => Color::Yellow,
                FeedbackLevel::Error => Color::Red,
                FeedbackLevel::Success => Color::Green,
            };
            (feedback.text.clone(), color)
        }
        None => (format!("{} file(s) prepared for rename", app.prepared), Color::White),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    let controls_text = if app.finished {
        "Ctrl-X to reset, F1 for help, Esc to quit"
    } else {
        "Ctrl-R to rename, F1 for help, Esc to quit"
    };

    let controls = Paragraph::new(controls_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(controls, chunks[1]);
}

pub fn render_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Rollover! - Help",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Fields:"),
        Line::from("  Tab/Shift-Tab - Move between fields"),
        Line::from("  Enter         - Load folder / next field"),
        Line::from(""),
        Line::from("File list:"),
        Line::from("  Up/k, Down/j  - Move"),
        Line::from("  Space         - Select or deselect file"),
        Line::from("  a / n         - Select all / none"),
        Line::from("  p             - Toggle preview panel"),
        Line::from(""),
        Line::from("Actions:"),
        Line::from("  Ctrl-Y        - Toggle year replacement"),
        Line::from("  Ctrl-S        - Toggle suffix"),
        Line::from("  Ctrl-R        - Copy renamed files to the output folder"),
        Line::from("  Ctrl-X        - Reset"),
        Line::from("  F1            - Toggle this help"),
        Line::from("  Esc           - Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc or F1 to close",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 60, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 30);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn test_ui_draws_on_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut app = App::new();
        app.show_help = true;
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
