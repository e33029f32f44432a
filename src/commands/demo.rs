use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, service::TaskService},
    msg_info,
};
use anyhow::Result;

/// Runs a fixed sequence of additions showing both accepted and rejected input.
///
/// Rejections are expected here, so they are reported but not returned.
pub fn cmd() -> Result<()> {
    let service = TaskService::new(Tasks::new()?);

    msg_info!(Message::DemoAddValid, true);
    let _ = service.add_task("Buy a book", "Software engineering textbook.", "2025-07-20", "High");

    msg_info!(Message::DemoAddSecond, true);
    let _ = service.add_task("Work out", "One hour at the gym.", "2025-07-21", "Medium");

    msg_info!(Message::DemoAddEmptyTitle, true);
    let _ = service.add_task("", "Task without a title.", "2025-07-22", "Low");

    msg_info!(Message::DemoAddDuplicate, true);
    let _ = service.add_task("buy a book", "Same title, different case.", "2025-07-20", "Low");

    Ok(())
}
