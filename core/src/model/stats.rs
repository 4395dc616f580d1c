use serde::{Deserialize, Serialize};
use crate::model::task::{Category, Priority, Task};

// Display order for charts and tables. Classification order lives in
// the extractor; this is presentation order only.
pub const PRIORITY_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
pub const CATEGORY_ORDER: [Category; 5] = [
    Category::Work,
    Category::Personal,
    Category::Academic,
    Category::Health,
    Category::Other,
];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub by_priority: Vec<(Priority, usize)>,
    pub by_category: Vec<(Category, usize)>,
}

impl TaskStats {
    pub fn collect(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.done).count();

        let by_priority = PRIORITY_ORDER
            .iter()
            .map(|p| (*p, tasks.iter().filter(|t| t.priority == *p).count()))
            .collect();

        let by_category = CATEGORY_ORDER
            .iter()
            .map(|c| (*c, tasks.iter().filter(|t| t.category == *c).count()))
            .collect();

        Self {
            total: tasks.len(),
            completed,
            by_priority,
            by_category,
        }
    }

    /// Completion ratio, 0.0 for an empty list.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(priority: Priority, category: Category, done: bool) -> Task {
        let due = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut t = Task::new("Something to do".to_string(), due, priority, category);
        t.done = done;
        t
    }

    #[test]
    fn test_empty_stats() {
        let stats = TaskStats::collect(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.progress(), 0.0);
    }

    #[test]
    fn test_distributions() {
        let tasks = vec![
            task(Priority::High, Category::Work, true),
            task(Priority::High, Category::Work, false),
            task(Priority::Medium, Category::Personal, false),
            task(Priority::Low, Category::Other, true),
        ];
        let stats = TaskStats::collect(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.progress(), 0.5);

        assert_eq!(stats.by_priority[0], (Priority::High, 2));
        assert_eq!(stats.by_priority[1], (Priority::Medium, 1));
        assert_eq!(stats.by_priority[2], (Priority::Low, 1));

        assert_eq!(stats.by_category[0], (Category::Work, 2));
        assert_eq!(stats.by_category[1], (Category::Personal, 1));
        assert_eq!(stats.by_category[4], (Category::Other, 1));
    }
}
