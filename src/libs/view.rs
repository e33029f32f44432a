use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "PRIORITY", "STATUS", "CREATED"]);
        table.add_row(row![
            task.id,
            task.title,
            task.description,
            task.due_date_label(),
            task.priority,
            task.status,
            task.created_at.format("%Y-%m-%d %H:%M:%S")
        ]);
        table.printstd();
    }
}
