//! 任务数据与任务存储
//!
//! TaskStore 是任务列表的唯一事实来源：持有内存中的有序列表，
//! 每次变更后整体序列化并写入 key-value 存储。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

use super::kv::KvStore;

/// 任务列表持久化 key（对应 tasks.json，跨版本保持稳定）
pub const TASKS_KEY: &str = "tasks";

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID (UUID 字符串形式，创建后不变)
    pub id: String,
    /// 任务标题 (用户输入)
    pub title: String,
    /// 是否已完成
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Task {
    /// 创建新任务，生成新 ID，默认未完成
    fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            is_completed: false,
        }
    }
}

/// 变更通知回调，收到当前任务列表
pub type Observer = Box<dyn FnMut(&[Task])>;

/// 任务存储
///
/// 变更策略：add / delete / toggle 就地修改内存列表，随后整体
/// 重新序列化写入（列表规模小，简单优先）。读写失败均静默处理，
/// 保证 UI 始终可用。
pub struct TaskStore {
    kv: KvStore,
    tasks: Vec<Task>,
    observers: Vec<Observer>,
}

impl TaskStore {
    /// 创建存储并从持久化数据恢复任务列表
    pub fn new(kv: KvStore) -> Self {
        let mut store = Self {
            kv,
            tasks: Vec::new(),
            observers: Vec::new(),
        };
        store.load();
        store
    }

    /// 使用默认存储目录 (~/.tick/) 创建
    pub fn open_default() -> Self {
        Self::new(KvStore::open_default())
    }

    /// 当前任务列表（只读视图）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 从存储加载任务列表
    ///
    /// key 不存在、读取失败或反序列化失败时保持空列表，
    /// 不向调用方暴露错误（首次启动或数据损坏时应用照常可用）。
    fn load(&mut self) {
        if let Ok(Some(tasks)) = self.try_load() {
            self.tasks = tasks;
        }
    }

    fn try_load(&self) -> Result<Option<Vec<Task>>> {
        match self.kv.get(TASKS_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// 将完整任务列表序列化后写入存储
    ///
    /// 序列化或写入失败时静默跳过，之前持久化的数据保持不变。
    fn save(&self) {
        let _ = self.try_save();
    }

    fn try_save(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.tasks)?;
        self.kv.set(TASKS_KEY, &raw)
    }

    /// 注册变更观察者，每次变更后回调
    pub fn subscribe(&mut self, observer: impl FnMut(&[Task]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// 通知所有观察者
    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.tasks);
        }
    }

    /// 添加新任务到列表末尾
    ///
    /// 标题非空由表现层保证，此处不做校验。
    pub fn add_task(&mut self, title: impl Into<String>) {
        self.tasks.push(Task::new(title));
        self.save();
        self.notify();
    }

    /// 批量删除指定位置的任务
    ///
    /// 位置以调用时的内存顺序为准。越界位置逐个跳过，
    /// 同批次中的有效位置照常删除。无任何变更时不写入、不通知。
    pub fn delete_tasks(&mut self, positions: &[usize]) {
        let mut sorted: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| p < self.tasks.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        if sorted.is_empty() {
            return;
        }

        // 从后往前删除，避免位置偏移
        for &pos in sorted.iter().rev() {
            self.tasks.remove(pos);
        }
        self.save();
        self.notify();
    }

    /// 切换指定位置任务的完成状态
    ///
    /// 越界时不做任何操作。
    pub fn toggle_completed(&mut self, position: usize) {
        let Some(task) = self.tasks.get_mut(position) else {
            return;
        };
        task.is_completed = !task.is_completed;
        self.save();
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> TaskStore {
        TaskStore::new(KvStore::new(dir.path()))
    }

    #[test]
    fn test_add_tasks_in_order_with_unique_ids() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add_task("one");
        store.add_task("two");
        store.add_task("three");

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(
            tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["one", "two", "three"]
        );
        assert!(tasks.iter().all(|t| !t.is_completed));

        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("Buy milk");
        store.add_task("Walk dog");
        store.toggle_completed(0);
        let before = store.tasks().to_vec();

        // 模拟重启：同一目录上创建新的存储实例
        let reloaded = store_in(&dir);
        assert_eq!(reloaded.tasks(), before.as_slice());
    }

    #[test]
    fn test_toggle_flips_exactly_one_task() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("a");
        store.add_task("b");
        store.add_task("c");

        store.toggle_completed(1);

        let flags: Vec<bool> = store.tasks().iter().map(|t| t.is_completed).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(store.tasks().len(), 3);

        store.toggle_completed(1);
        assert!(store.tasks().iter().all(|t| !t.is_completed));
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("a");

        store.toggle_completed(5);

        assert_eq!(store.tasks().len(), 1);
        assert!(!store.tasks()[0].is_completed);
    }

    #[test]
    fn test_delete_shifts_following_tasks_left() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("a");
        store.add_task("b");
        store.add_task("c");

        store.delete_tasks(&[1]);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_batch_skips_invalid_positions() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("a");
        store.add_task("b");
        store.add_task("c");

        // 越界位置跳过，有效位置照常删除
        store.delete_tasks(&[2, 0, 99]);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b"]);
    }

    #[test]
    fn test_load_from_corrupted_data_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path());
        kv.set(TASKS_KEY, "not valid json {{{").unwrap();

        let store = TaskStore::new(kv);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_load_from_missing_key_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_wire_format_uses_original_field_names() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_task("Buy milk");

        let raw = KvStore::new(dir.path()).get(TASKS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"isCompleted\":false"));
        assert!(raw.contains("\"title\":\"Buy milk\""));
        assert!(raw.contains("\"id\":"));
    }

    #[test]
    fn test_loads_unversioned_external_format() {
        let dir = TempDir::new().unwrap();
        let kv = KvStore::new(dir.path());
        kv.set(
            TASKS_KEY,
            r#"[{"id":"A1B2C3D4-0000-0000-0000-000000000000","title":"Buy milk","isCompleted":true}]"#,
        )
        .unwrap();

        let store = TaskStore::new(kv);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert!(store.tasks()[0].is_completed);
        assert_eq!(store.tasks()[0].id, "A1B2C3D4-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_observer_notified_after_each_mutation() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let count = Rc::new(Cell::new(0usize));
        let seen = Rc::clone(&count);
        store.subscribe(move |_tasks| seen.set(seen.get() + 1));

        store.add_task("a");
        store.toggle_completed(0);
        store.delete_tasks(&[0]);
        assert_eq!(count.get(), 3);

        // 无变更的操作不触发通知
        store.toggle_completed(42);
        store.delete_tasks(&[42]);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_full_scenario_with_restart() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.add_task("Buy milk");
        store.add_task("Walk dog");
        store.toggle_completed(0);

        {
            let tasks = store.tasks();
            assert_eq!(tasks[0].title, "Buy milk");
            assert!(tasks[0].is_completed);
            assert_eq!(tasks[1].title, "Walk dog");
            assert!(!tasks[1].is_completed);
        }

        store.delete_tasks(&[1]);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert!(store.tasks()[0].is_completed);

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.tasks(), store.tasks());
    }
}
