use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        service::TaskService,
        task::{Priority, Task},
        view::View,
    },
    msg_print,
};
use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompts for all fields when omitted
    title: Option<String>,
    /// Free-text description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Due date in YYYY-MM-DD format
    #[arg(long)]
    due: Option<String>,
    /// Priority: Low, Medium or High
    #[arg(short, long, default_value = "Medium")]
    priority: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let (title, description, due, priority) = match args.title {
        Some(title) => {
            let due = match args.due {
                Some(due) => due,
                None => prompt_due()?,
            };
            (title, args.description, due, args.priority)
        }
        None => prompt_all()?,
    };

    let service = TaskService::new(Tasks::new()?);
    let task = create(&service, &title, &description, &due, &priority)?;

    msg_print!(Message::TaskCreatedHeader);
    View::task(&task);

    Ok(())
}

/// Runs `add_task`, keeping the rejected `TaskError` as the source of the returned error.
fn create(service: &TaskService, title: &str, description: &str, due: &str, priority: &str) -> Result<Task> {
    service
        .add_task(title, description, due, priority)
        .context(Message::TaskCreateFailed)
}

fn prompt_due() -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .interact_text()?)
}

fn prompt_all() -> Result<(String, String, String, String)> {
    let theme = ColorfulTheme::default();
    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due = prompt_due()?;

    let labels = Priority::labels();
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&labels)
        .default(1)
        .interact()?;

    Ok((title, description, due, labels[selection].to_string()))
}
