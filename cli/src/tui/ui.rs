use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use notetask_core::{Category, Priority, Task};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let today = Local::now().date_naive();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Notes input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new("NOTETASK")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_progress(f, app, main_chunks[1]);

    // Split Content into Left (Checklist) and Right (Detail + Analytics)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[2]);

    draw_task_list(f, app, today, content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(content_chunks[1]);

    draw_detail_view(f, app, today, right_chunks[0]);
    draw_analytics(f, app, right_chunks[1]);

    draw_input(f, app, main_chunks[3]);

    // Footer
    let help_text = match app.input_mode {
        InputMode::Composing => "Enter: Extract tasks | Esc: Cancel".to_string(),
        InputMode::Normal => app.message.clone().unwrap_or_else(|| {
            "a: Add notes | Space: Toggle done | d: Delete | c: Clear | q: Quit".to_string()
        }),
    };
    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let label = format!("Completed: {} / {}", stats.completed, stats.total);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(stats.progress())
        .label(label);
    f.render_widget(gauge, area);
}

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

fn due_style(due: NaiveDate, today: NaiveDate) -> Style {
    if due < today {
        Style::default().fg(Color::Red)
    } else if due == today {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn category_short(category: Category) -> &'static str {
    match category {
        Category::Work => "Work",
        Category::Personal => "Pers",
        Category::Academic => "Acad",
        Category::Health => "Hlth",
        Category::Other => "Othr",
    }
}

fn draw_task_list(f: &mut Frame, app: &mut App, today: NaiveDate, area: Rect) {
    let rows: Vec<Row> = app
        .tasks()
        .iter()
        .map(|task| {
            let status_icon = if task.done { "✔" } else { "☐" };

            let pri_str = match task.priority {
                Priority::High => "H",
                Priority::Medium => "M",
                Priority::Low => "L",
            };

            Row::new(vec![
                Span::styled(status_icon, Style::default()),
                Span::styled(pri_str, priority_style(task.priority)),
                Span::styled(task.due.format("%m-%d").to_string(), due_style(task.due, today)),
                Span::raw(category_short(task.category)),
                Span::styled(task.text.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Priority
            Constraint::Length(6),  // Due
            Constraint::Length(5),  // Category
            Constraint::Min(10),    // Task
        ],
    )
    .header(Row::new(vec!["St", "Pr", "Due", "Cat", "Task"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(" To-Do List ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, today: NaiveDate, area: Rect) {
    if let Some(task) = app.selected_task() {
        let due_note = if task.due < today {
            Some(Span::styled(
                " (Overdue)",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if task.due == today {
            Some(Span::styled(
                " (Due today)",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        } else {
            None
        };

        let mut due_line = vec![
            Span::styled("Due: ", Style::default().fg(Color::Blue)),
            Span::raw(task.due.format("%Y-%m-%d").to_string()),
        ];
        if let Some(note) = due_note {
            due_line.push(note);
        }

        let detail_text = vec![
            Line::from(vec![
                Span::styled("Task: ", Style::default().fg(Color::Blue)),
                Span::styled(task.text.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
                Span::raw(task.id.to_string()),
            ]),
            Line::from(due_line),
            Line::from(vec![
                Span::styled("Priority: ", Style::default().fg(Color::Blue)),
                Span::styled(format!("{:?}", task.priority), priority_style(task.priority)),
            ]),
            Line::from(vec![
                Span::styled("Category: ", Style::default().fg(Color::Blue)),
                Span::raw(format!("{:?}", task.category)),
            ]),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Blue)),
                Span::raw(if task.done { "Done" } else { "Pending" }),
            ]),
        ];

        let detail_block = Paragraph::new(detail_text)
            .block(Block::default().title(" Detail ").borders(Borders::ALL).border_type(BorderType::Rounded))
            .wrap(Wrap { trim: true });

        f.render_widget(detail_block, area);
    } else {
        let detail_block = Block::default().title(" Detail ").borders(Borders::ALL).border_type(BorderType::Rounded);
        f.render_widget(detail_block, area);
    }
}

fn draw_analytics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();

    let mut lines = Vec::new();
    let mut priority_spans = vec![Span::styled("Priority  ", Style::default().fg(Color::DarkGray))];
    for (priority, count) in &stats.by_priority {
        priority_spans.push(Span::styled(
            format!("{:?}: {}  ", priority, count),
            priority_style(*priority),
        ));
    }
    lines.push(Line::from(priority_spans));
    lines.push(Line::from(""));

    let mut category_spans = vec![Span::styled("Category  ", Style::default().fg(Color::DarkGray))];
    for (category, count) in &stats.by_category {
        category_spans.push(Span::raw(format!("{:?}: {}  ", category, count)));
    }
    lines.push(Line::from(category_spans));

    let analytics = Paragraph::new(lines)
        .block(Block::default().title(" Analytics ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true });
    f.render_widget(analytics, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Composing => {
            let input = Paragraph::new(app.input.as_str())
                .block(
                    Block::default()
                        .title(" Notes (each sentence becomes a task) ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Cyan)),
                );
            f.render_widget(input, area);

            // Cursor sits after the chars left of the insertion point.
            let byte_index: usize = app
                .input
                .chars()
                .take(app.cursor_position)
                .map(|c| c.len_utf8())
                .sum();
            let x = area.x + 1 + app.input[..byte_index].width() as u16;
            f.set_cursor_position(Position::new(x, area.y + 1));
        }
        InputMode::Normal => {
            let hint = Paragraph::new("Press 'a' and type your notes; dates, priorities and categories are detected automatically.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(" Notes ").borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(hint, area);
        }
    }
}
