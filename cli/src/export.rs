use anyhow::Result;
use notetask_core::Task;
use tabled::{Table, Tabled};
use tabled::settings::Style;
use unicode_width::UnicodeWidthStr;

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl TaskRow {
    fn from_task(index: usize, task: &Task) -> Self {
        Self {
            index,
            task: task.text.clone(),
            due: task.due.format("%Y-%m-%d").to_string(),
            priority: format!("{:?}", task.priority),
            category: format!("{:?}", task.category),
            status: if task.done { "Done" } else { "Pending" }.to_string(),
        }
    }
}

/// Plain-text tabular form of the full task list.
pub fn render_table(tasks: &[Task]) -> String {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| TaskRow::from_task(i + 1, t))
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

const DOC_TITLE: &str = "Note-to-Task - Task List";
const TASKS_PER_PAGE: usize = 12;
const PAGE_WIDTH: usize = 72;

/// Paginated document form: a centered title and ruled header on each
/// page, a fixed number of records per page and a page footer.
pub fn render_document(tasks: &[Task]) -> String {
    let pages: Vec<&[Task]> = if tasks.is_empty() {
        vec![&[]]
    } else {
        tasks.chunks(TASKS_PER_PAGE).collect()
    };
    let total_pages = pages.len();

    let mut out = String::new();
    for (page_no, page) in pages.iter().enumerate() {
        if page_no > 0 {
            out.push('\u{c}');
        }
        out.push_str(&center(DOC_TITLE));
        out.push('\n');
        out.push_str(&"=".repeat(PAGE_WIDTH));
        out.push_str("\n\n");

        for (offset, task) in page.iter().enumerate() {
            let index = page_no * TASKS_PER_PAGE + offset + 1;
            out.push_str(&format!("{}. {}\n", index, task.text));
            out.push_str(&format!(
                "   Due: {} | Priority: {:?} | Category: {:?} | Status: {}\n\n",
                task.due.format("%Y-%m-%d"),
                task.priority,
                task.category,
                if task.done { "Done" } else { "Pending" },
            ));
        }

        out.push_str(&right_align(&format!("Page {}/{}", page_no + 1, total_pages)));
        out.push('\n');
    }
    out
}

/// JSON dump of the full task list.
pub fn render_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

fn center(text: &str) -> String {
    let width = text.width();
    if width >= PAGE_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((PAGE_WIDTH - width) / 2), text)
}

fn right_align(text: &str) -> String {
    let width = text.width();
    if width >= PAGE_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(PAGE_WIDTH - width), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use notetask_core::{extract_tasks, Category, Priority, Task};

    fn sample() -> Vec<Task> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        extract_tasks("Submit assignment by Monday. Call mom later.", today)
    }

    #[test]
    fn test_table_has_every_column() {
        let table = render_table(&sample());
        for header in ["#", "Task", "Due", "Priority", "Category", "Status"] {
            assert!(table.contains(header), "missing column {}", header);
        }
        assert!(table.contains("Submit assignment by Monday."));
        assert!(table.contains("2024-06-10"));
        assert!(table.contains("Pending"));
    }

    #[test]
    fn test_document_record_line() {
        let doc = render_document(&sample());
        assert!(doc.contains(DOC_TITLE));
        assert!(doc.contains("1. Submit assignment by Monday."));
        assert!(doc.contains(
            "Due: 2024-06-10 | Priority: Medium | Category: Academic | Status: Pending"
        ));
        assert!(doc.trim_end().ends_with("Page 1/1"));
    }

    #[test]
    fn test_document_paginates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let notes = (0..30)
            .map(|i| format!("Water plant number {}.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let tasks = extract_tasks(&notes, today);
        assert_eq!(tasks.len(), 30);

        let doc = render_document(&tasks);
        assert_eq!(doc.matches('\u{c}').count(), 2);
        assert!(doc.contains("Page 1/3"));
        assert!(doc.contains("Page 3/3"));
        // Numbering continues across pages.
        assert!(doc.contains("13. Water plant number 12."));
    }

    #[test]
    fn test_json_round_trips() {
        let tasks = sample();
        let json = render_json(&tasks).unwrap();
        let parsed: Vec<Task> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].priority, Priority::Low);
        assert_eq!(parsed[1].category, Category::Personal);
    }
}
