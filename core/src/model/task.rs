use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Personal,
    Academic,
    Health,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub id: Uuid,
    pub text: String,

    // Never optional: extraction always assigns a date, falling back to
    // a priority-based deadline when the sentence names none.
    // Date-only; time-of-day carries no meaning downstream.
    pub due: NaiveDate,

    pub priority: Priority,
    pub category: Category,
    pub done: bool,

    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(text: String, due: NaiveDate, priority: Priority, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            due,
            priority,
            category,
            done: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_task_defaults() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let task = Task::new("Call mom".to_string(), due, Priority::Low, Category::Personal);
        assert!(!task.done);
        assert_eq!(task.due, due);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.category, Category::Personal);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Category::default(), Category::Other);
    }
}
