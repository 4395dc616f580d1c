use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Gauge, Padding, Paragraph},
};
use notetask_core::{Category, Priority, Task, TaskStats};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    high: Color,
    medium: Color,
    low: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    high: Color::Red,
    medium: Color::Yellow,
    low: Color::Green,
};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => THEME.high,
        Priority::Medium => THEME.medium,
        Priority::Low => THEME.low,
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::Blue,
        Category::Personal => Color::Magenta,
        Category::Academic => Color::Cyan,
        Category::Health => Color::Green,
        Category::Other => Color::Gray,
    }
}

/// One-shot analytics dashboard over an extracted task list.
pub fn run(tasks: &[Task]) -> Result<()> {
    let stats = TaskStats::collect(tasks);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &stats))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, stats: &TaskStats) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(10),   // Charts + summary
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    let title = Paragraph::new(Span::styled(
        "NOTETASK ANALYTICS",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, main_layout[0]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Progress ---
    draw_progress(frame, stats, main_layout[1]);

    // --- Charts ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Priority chart
            Constraint::Percentage(40), // Category chart
            Constraint::Percentage(20), // Summary
        ])
        .split(main_layout[2]);

    draw_priority_chart(frame, stats, content_chunks[0]);
    draw_category_chart(frame, stats, content_chunks[1]);
    draw_summary(frame, stats, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[3]);
}

fn draw_progress(frame: &mut Frame, stats: &TaskStats, area: Rect) {
    let label = format!("Completed: {} / {}", stats.completed, stats.total);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.low))
        .ratio(stats.progress())
        .label(label);
    frame.render_widget(gauge, area);
}

fn draw_priority_chart(frame: &mut Frame, stats: &TaskStats, area: Rect) {
    let bar_items: Vec<Bar> = stats
        .by_priority
        .iter()
        .map(|(priority, count)| {
            Bar::default()
                .label(format!("{:?}", priority))
                .value(*count as u64)
                .style(Style::default().fg(priority_color(*priority)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Priority Distribution ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bar_items));
    frame.render_widget(chart, area);
}

fn draw_category_chart(frame: &mut Frame, stats: &TaskStats, area: Rect) {
    let bar_items: Vec<Bar> = stats
        .by_category
        .iter()
        .map(|(category, count)| {
            Bar::default()
                .label(format!("{:?}", category))
                .value(*count as u64)
                .style(Style::default().fg(category_color(*category)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Category Distribution ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .bar_width(9)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items));
    frame.render_widget(chart, area);
}

fn draw_summary(frame: &mut Frame, stats: &TaskStats, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tasks:     ", Style::default().fg(THEME.muted)),
            Span::styled(stats.total.to_string(), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Completed: ", Style::default().fg(THEME.muted)),
            Span::styled(
                stats.completed.to_string(),
                Style::default().fg(THEME.low).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (priority, count) in &stats.by_priority {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<9}", format!("{:?}:", priority)),
                Style::default().fg(priority_color(*priority)),
            ),
            Span::raw(format!(" {}", count)),
        ]));
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted)),
    );
    frame.render_widget(summary, area);
}
