#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Barrier;
    use std::thread;
    use taskr::db::tasks::Tasks;
    use taskr::libs::config::StoreConfig;
    use taskr::libs::error::TaskError;
    use taskr::libs::service::TaskService;
    use taskr::libs::task::{Priority, Status};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ServiceTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ServiceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks_database.json");
            ServiceTestContext { _temp_dir: temp_dir, path }
        }
    }

    impl ServiceTestContext {
        fn service(&self) -> TaskService {
            TaskService::new(Tasks::open(&self.path))
        }

        fn strict_service(&self) -> TaskService {
            TaskService::new(Tasks::with_config(&StoreConfig {
                file: self.path.to_string_lossy().into_owned(),
                fail_on_corrupt: true,
                pretty: true,
            }))
        }
    }

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(8, 15, 0).unwrap()
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_add_to_empty_store(ctx: &mut ServiceTestContext) {
        let task = ctx.service().add_task("Buy milk", "desc", "2025-07-20", "High").unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "desc");
        assert_eq!(task.due_date_label(), "2025-07-20");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Incomplete);
        assert_eq!(task.created_at, task.last_updated_at);

        let stored = Tasks::open(&ctx.path).load().unwrap();
        assert_eq!(stored, vec![task]);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_repeat_is_duplicate(ctx: &mut ServiceTestContext) {
        let service = ctx.service();
        service.add_task("Buy milk", "desc", "2025-07-20", "High").unwrap();

        let result = service.add_task("Buy milk", "desc", "2025-07-20", "High");
        assert_eq!(
            result,
            Err(TaskError::DuplicateTask {
                title: "Buy milk".to_string(),
                due_date: "2025-07-20".to_string()
            })
        );
        assert_eq!(Tasks::open(&ctx.path).load().unwrap().len(), 1);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_duplicate_ignores_case_description_and_priority(ctx: &mut ServiceTestContext) {
        let service = ctx.service();
        service.add_task("Buy milk", "desc", "2025-07-20", "High").unwrap();

        for (title, description, priority) in [("BUY MILK", "", "Low"), ("buy milk", "other", "Medium"), ("bUy MiLk", "desc", "High")] {
            let result = service.add_task(title, description, "2025-07-20", priority);
            assert!(matches!(result, Err(TaskError::DuplicateTask { .. })), "{title}");
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_same_title_other_date_is_accepted(ctx: &mut ServiceTestContext) {
        let service = ctx.service();
        service.add_task("Buy milk", "", "2025-07-20", "High").unwrap();

        assert_eq!(service.add_task("Buy milk", "", "2025-07-21", "High").unwrap().id, 2);
        assert_eq!(service.add_task("Buy bread", "", "2025-07-20", "High").unwrap().id, 3);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_ids_are_sequential(ctx: &mut ServiceTestContext) {
        for n in 1..=5u64 {
            // A fresh service each time, so the id comes from what is on disk.
            let task = ctx.service().add_task(&format!("Task {}", n), "", "2025-07-20", "Low").unwrap();
            assert_eq!(task.id, n);
        }

        let ids: Vec<u64> = Tasks::open(&ctx.path).load().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_empty_title_leaves_store_untouched(ctx: &mut ServiceTestContext) {
        for title in ["", " ", "\t \n"] {
            assert_eq!(ctx.service().add_task(title, "x", "2025-07-20", "High"), Err(TaskError::EmptyTitle));
        }
        assert!(!ctx.path.exists());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_invalid_date_leaves_store_untouched(ctx: &mut ServiceTestContext) {
        let service = ctx.service();
        service.add_task("Existing", "", "2025-07-20", "High").unwrap();
        let before = fs::read(&ctx.path).unwrap();

        for due in ["20-07-2025", "2025-7-20", "2025-02-30", ""] {
            assert_eq!(service.add_task("Run", "x", due, "High"), Err(TaskError::InvalidDateFormat(due.to_string())));
        }
        assert_eq!(fs::read(&ctx.path).unwrap(), before);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_invalid_priority_leaves_store_untouched(ctx: &mut ServiceTestContext) {
        for priority in ["Urgent", "high", ""] {
            assert_eq!(
                ctx.service().add_task("Run", "x", "2025-07-20", priority),
                Err(TaskError::InvalidPriority(priority.to_string()))
            );
        }
        assert!(!ctx.path.exists());
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_validation_runs_before_store_is_read(ctx: &mut ServiceTestContext) {
        fs::write(&ctx.path, "garbage").unwrap();

        // The corrupt store would be a hard error, but the title check comes first.
        assert_eq!(ctx.strict_service().add_task("", "x", "2025-07-20", "High"), Err(TaskError::EmptyTitle));
        assert!(matches!(
            ctx.strict_service().add_task("Run", "x", "2025-07-20", "High"),
            Err(TaskError::StorageReadError { .. })
        ));
        assert_eq!(fs::read_to_string(&ctx.path).unwrap(), "garbage");
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_corrupt_store_is_replaced_by_default(ctx: &mut ServiceTestContext) {
        fs::write(&ctx.path, "garbage").unwrap();

        let task = ctx.service().add_task("Run", "x", "2025-07-20", "High").unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(Tasks::open(&ctx.path).load().unwrap(), vec![task]);
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_write_failure_returns_no_task(ctx: &mut ServiceTestContext) {
        fs::create_dir(&ctx.path).unwrap();
        fs::write(ctx.path.join("keep"), "x").unwrap();

        let result = ctx.service().add_task("Run", "x", "2025-07-20", "High");
        assert!(matches!(result, Err(TaskError::StorageWriteError { .. })));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_timestamps_come_from_clock(ctx: &mut ServiceTestContext) {
        let service = TaskService::with_clock(Tasks::open(&ctx.path), fixed_now);
        let task = service.add_task("Run", "", "2025-07-20", "Low").unwrap();
        assert_eq!(task.created_at, fixed_now());
        assert_eq!(task.last_updated_at, fixed_now());

        let raw = fs::read_to_string(&ctx.path).unwrap();
        assert!(raw.contains(r#""created_at": "2025-07-01T08:15:00""#));
        assert!(raw.contains(r#""last_updated_at": "2025-07-01T08:15:00""#));
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_concurrent_adds_through_separate_handles(ctx: &mut ServiceTestContext) {
        const WRITERS: u64 = 8;

        for round in 0..10 {
            let path = ctx.path.with_file_name(format!("round_{}.json", round));
            let barrier = Barrier::new(WRITERS as usize);

            thread::scope(|scope| {
                for n in 0..WRITERS {
                    let (path, barrier) = (&path, &barrier);
                    scope.spawn(move || {
                        // Each thread opens its own handle on the same file.
                        let service = TaskService::new(Tasks::open(path));
                        barrier.wait();
                        service.add_task(&format!("Task {}", n), "", "2025-07-20", "Low").unwrap();
                    });
                }
            });

            let mut ids: Vec<u64> = Tasks::open(&path).load().unwrap().iter().map(|t| t.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (1..=WRITERS).collect::<Vec<_>>(), "round {}", round);
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_duplicate_with_final_sigma(ctx: &mut ServiceTestContext) {
        let service = ctx.service();
        service.add_task("οδοσ", "", "2025-07-20", "Low").unwrap();

        for title in ["ΟΔΟΣ", "οδος", "Οδος"] {
            assert!(matches!(service.add_task(title, "", "2025-07-20", "Low"), Err(TaskError::DuplicateTask { .. })), "{title}");
        }
    }

    #[test_context(ServiceTestContext)]
    #[test]
    fn test_non_breaking_space_title_is_accepted(ctx: &mut ServiceTestContext) {
        let task = ctx.service().add_task("\u{a0}", "", "2025-07-20", "Low").unwrap();
        assert_eq!(task.title, "\u{a0}");

        assert_eq!(ctx.service().add_task("\u{1}\u{7} ", "", "2025-07-20", "Low"), Err(TaskError::EmptyTitle));
    }
}
