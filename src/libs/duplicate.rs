use super::task::Task;
use chrono::NaiveDate;

/// Whether `tasks` already holds a task with the same title (ignoring case)
/// and the same due date.
pub fn is_duplicate(tasks: &[Task], title: &str, due_date: NaiveDate) -> bool {
    tasks.iter().any(|task| task.due_date == due_date && equals_ignore_case(&task.title, title))
}

/// Character-by-character comparison where two characters match when they
/// are equal, or equal after upper-casing, or equal after lower-casing.
///
/// Unlike comparing `str::to_lowercase` results this ignores the position of
/// a character, so a word-final `Σ` still matches `σ`.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(x: char, y: char) -> bool {
    x == y || x.to_uppercase().eq(y.to_uppercase()) || x.to_lowercase().eq(y.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn matches_title_case_insensitively_on_same_date() {
        let tasks = vec![Task::new(1, "Buy milk", "", date(2025, 7, 20), Priority::High)];

        assert!(is_duplicate(&tasks, "Buy milk", date(2025, 7, 20)));
        assert!(is_duplicate(&tasks, "BUY MILK", date(2025, 7, 20)));
        assert!(!is_duplicate(&tasks, "Buy milk", date(2025, 7, 21)));
        assert!(!is_duplicate(&tasks, "Buy bread", date(2025, 7, 20)));
        assert!(!is_duplicate(&[], "Buy milk", date(2025, 7, 20)));
    }

    #[test]
    fn non_ascii_titles() {
        let tasks = vec![Task::new(1, "Mua sách", "", date(2025, 7, 20), Priority::High)];
        assert!(is_duplicate(&tasks, "MUA SÁCH", date(2025, 7, 20)));

        let tasks = vec![Task::new(1, "οδοσ", "", date(2025, 7, 20), Priority::High)];
        assert!(is_duplicate(&tasks, "ΟΔΟΣ", date(2025, 7, 20)));
        assert!(is_duplicate(&tasks, "οδος", date(2025, 7, 20)));
        assert!(!is_duplicate(&tasks, "οδο", date(2025, 7, 20)));
    }

    #[test]
    fn equals_ignore_case_per_character() {
        assert!(equals_ignore_case("Straße", "STRAßE"));
        assert!(equals_ignore_case("ǅ", "ǆ"));
        assert!(!equals_ignore_case("Straße", "STRASSE"));
        assert!(!equals_ignore_case("abc", "abcd"));
    }
}
