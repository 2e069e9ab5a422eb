use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_search_bar(app, frame, chunks[0]);
    render_form(app, frame, chunks[1]);
    render_task_list(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let text = if app.search.is_empty() && !focused {
        Line::from(Span::styled(
            "Search...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.search.as_str())
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(focus_style(focused)),
    );
    frame.render_widget(search, area);

    if focused {
        frame.set_cursor_position((area.x + 1 + app.search.len() as u16, area.y + 1));
    }
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Form;
    let title = if app.form.is_editing() {
        "Edit item"
    } else {
        "Add item"
    };

    let line = Line::from(vec![
        Span::raw(app.form.text()),
        Span::styled(
            format!("  x{}", app.form.quantity),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let form = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(focused)),
    );
    frame.render_widget(form, area);

    if focused {
        frame.set_cursor_position((area.x + 1 + app.form.cursor_pos() as u16, area.y + 1));
    }
}

fn render_task_list(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List;
    let tasks = app.visible_tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Nothing here. Press 'a' to add an item!",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        tasks
            .iter()
            .map(|task| {
                let marker = if task.completed { "[x]" } else { "[ ]" };
                let style = if task.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled(task.text.clone(), style),
                    Span::styled(
                        format!("  x{}", task.quantity),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };

    let title = format!(
        "Grocery List ({}) | Sort: {} | Filter: {}",
        tasks.len(),
        app.store.sort().label(),
        app.filter.label()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(focused)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(app.selected);
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.focus {
        Focus::Search => "Type to search | Enter/Esc: back to list | Tab: next pane",
        Focus::Form => {
            "Type item text | Up/Down: quantity | Enter: save | Esc: cancel | Tab: next pane"
        }
        Focus::List => {
            "j/k: move | e: edit | Space: toggle done | s: sort | f: filter | /: search | a: add | D: delete all | q: quit"
        }
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
