#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u64, String), // id, title
    TaskCreateFailed,
    TaskTitleEmpty,
    TaskDueDateInvalid(String),     // raw input
    TaskPriorityInvalid(String),    // raw input
    TaskDuplicate(String, String),  // title, due date
    TaskCreatedHeader,

    // === STORE MESSAGES ===
    StoreReadFailed(String, String),  // path, reason
    StoreWriteFailed(String, String), // path, reason
    StoreTreatedAsEmpty(String),      // path
    StoreLoaded(usize, String),       // count, path
    StoreSaved(usize, String),        // count, path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleStore,

    // === DEMO MESSAGES ===
    DemoAddValid,
    DemoAddSecond,
    DemoAddEmptyTitle,
    DemoAddDuplicate,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,
    PromptStoreFile,
    PromptStoreFailOnCorrupt,
    PromptStorePretty,
    PromptSelectModules,
}
