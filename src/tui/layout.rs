use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::sort::{SortKey, SortState};
use crate::tui::app::{InputMode, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_bar(frame, app, chunks[0], colors);
    render_results(frame, app, chunks[1], colors);
    render_status_bar(frame, app, chunks[2], colors);
}

fn render_search_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let editing = app.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let title = match &app.view.active_query {
        Some(query) => format!(" Search [showing \"{}\"] ", query),
        None => " Search ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(app.view.search_term.as_str()).block(block);
    frame.render_widget(paragraph, area);

    if editing {
        let typed = app.view.search_term.chars().count() as u16;
        let x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_results(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let is_active = app.input_mode == InputMode::Normal;
    let border_style = if is_active {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let title = format!(
        " Results ({}) [page {}] ",
        app.view.items.len(),
        app.view.current_page + 1
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = &app.view.error {
        let lines = vec![
            Line::from(Span::styled(
                "Something went wrong.",
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(colors.error),
            )),
            Line::from(""),
            Line::from("Load more to retry, or submit another search."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    if app.view.items.is_empty() {
        let message = if app.view.loading {
            "Loading..."
        } else if app.view.active_query.is_some() {
            "No results"
        } else {
            "Press / to search"
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let header_style = Style::default()
        .fg(colors.header)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(column_title("Title", SortKey::Title, app.view.sort)),
        Cell::from(column_title("Author", SortKey::Author, app.view.sort)),
        Cell::from(column_title("Comments", SortKey::Comments, app.view.sort)),
        Cell::from(column_title("Points", SortKey::Points, app.view.sort)),
    ])
    .style(header_style);

    let rows: Vec<Row> = app
        .view
        .items
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.display_title().to_string()),
                Cell::from(item.author.clone()),
                Cell::from(item.comment_count.to_string()),
                Cell::from(item.score.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(10),
        Constraint::Percentage(10),
    ];

    let highlight_style = Style::default()
        .bg(colors.selection_bg)
        .fg(colors.selection_fg)
        .add_modifier(Modifier::BOLD);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.view.loading {
        match &app.view.active_query {
            Some(query) => format!("Loading \"{}\"...", query),
            None => "Loading...".to_string(),
        }
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.input_mode == InputMode::Editing {
        "Enter:Search  Esc:Cancel".to_string()
    } else {
        let mut hints = String::from("j/k:Nav  /:Search  d:Dismiss  0-4:Sort  o:Open  q:Quit");
        if app.view.has_more {
            hints.insert_str(0, "m:More  ");
        }
        match app.view.total_hits {
            Some(hits) => format!("{} hits  {}", hits, hints),
            None => hints,
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

/// Column header with an arrow on the active sort column.
fn column_title(name: &str, key: SortKey, sort: SortState) -> String {
    if sort.key != key {
        return name.to_string();
    }
    let ascending = match key {
        SortKey::Title | SortKey::Author => !sort.reverse,
        _ => sort.reverse,
    };
    format!("{} {}", name, if ascending { "▲" } else { "▼" })
}
