use chrono::NaiveDate;

use crate::model::task::{Category, Priority, Task};
use crate::segment::split_sentences;
use crate::time::{fallback_deadline, scan_date};

/// Sentences shorter than this many characters are noise, not tasks.
pub const MIN_TASK_CHARS: usize = 5;

// Ordered first-match classification: tables are checked top to bottom
// and the first set with a hit wins. Check order is a contract, so these
// are slices, not maps.
const PRIORITY_RULES: &[(Priority, &[&str])] = &[
    (Priority::High, &["urgent", "asap", "immediately", "important"]),
    (Priority::Medium, &["soon", "next", "upcoming"]),
    (Priority::Low, &["later", "someday", "eventually"]),
];

const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Work, &["project", "meeting", "client", "email"]),
    (Category::Health, &["doctor", "exercise", "meditate", "health"]),
    (Category::Academic, &["assignment", "study", "exam", "class"]),
    (Category::Personal, &["family", "call mom", "birthday", "home"]),
];

/// Priority signalled by the sentence's keywords; Medium when nothing
/// matches.
pub fn detect_priority(sentence: &str) -> Priority {
    let s = sentence.to_lowercase();
    for (priority, keywords) in PRIORITY_RULES {
        if keywords.iter().any(|k| s.contains(k)) {
            return *priority;
        }
    }
    Priority::Medium
}

/// Category signalled by the sentence's keywords; Other when nothing
/// matches.
pub fn detect_category(sentence: &str) -> Category {
    let s = sentence.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|k| s.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

/// Run the whole pipeline: segment the notes, drop degenerate sentences,
/// and build one task record per remaining sentence in input order.
///
/// Pure function of `(text, today)`; `today` feeds both future-preferring
/// date resolution and the priority-based fallback deadline, so callers
/// inject the clock once at the edge.
pub fn extract_tasks(text: &str, today: NaiveDate) -> Vec<Task> {
    let mut tasks = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.chars().count() < MIN_TASK_CHARS {
            continue;
        }

        // Priority first: the fallback deadline depends on it.
        let priority = detect_priority(&sentence);
        let due = scan_date(&sentence, today)
            .unwrap_or_else(|| fallback_deadline(priority, today));
        let category = detect_category(&sentence);

        tasks.push(Task::new(sentence, due, priority, category));
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_first_match_order() {
        // High is checked before Low, so a sentence with both is High.
        assert_eq!(detect_priority("This is urgent, do it someday"), Priority::High);
        assert_eq!(detect_priority("Review the draft soon"), Priority::Medium);
        assert_eq!(detect_priority("Clean the garage eventually"), Priority::Low);
        assert_eq!(detect_priority("Buy milk"), Priority::Medium);
    }

    #[test]
    fn test_priority_is_case_insensitive() {
        assert_eq!(detect_priority("URGENT: reply to the email"), Priority::High);
        assert_eq!(detect_priority("Someday I'll learn piano"), Priority::Low);
    }

    #[test]
    fn test_category_first_match_order() {
        // Work is checked before Health.
        assert_eq!(
            detect_category("Schedule a meeting with the doctor"),
            Category::Work
        );
        assert_eq!(detect_category("Book a doctor appointment"), Category::Health);
        assert_eq!(detect_category("Study for the exam"), Category::Academic);
        assert_eq!(detect_category("Plan the birthday dinner"), Category::Personal);
        assert_eq!(detect_category("Buy new shoes"), Category::Other);
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(detect_category("Call mom after lunch"), Category::Personal);
    }

    #[test]
    fn test_short_sentences_are_skipped() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        // "Go." is 3 chars, below the threshold regardless of content.
        let tasks = extract_tasks("Go. Submit the assignment.", today);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Submit the assignment.");
    }

    #[test]
    fn test_threshold_counts_chars_not_words() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        // Exactly 5 characters passes.
        assert_eq!(extract_tasks("Do it", today).len(), 1);
        assert_eq!(extract_tasks("Hi", today).len(), 0);
    }

    #[test]
    fn test_empty_input() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert!(extract_tasks("", today).is_empty());
    }
}
