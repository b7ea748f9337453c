use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::storage::config::{self, Config, ThemeConfig};
use crate::storage::tasks::TaskStore;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储（任务列表的唯一事实来源）
    pub store: TaskStore,
    /// 列表选择状态
    pub list_state: ListState,
    /// 是否显示 Add Task 弹窗
    pub show_add_dialog: bool,
    /// Add Task 弹窗的输入缓冲
    pub add_input: String,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 重绘标记（由存储的变更通知置位）
    dirty: Rc<Cell<bool>>,
}

impl App {
    pub fn new() -> Self {
        let config = config::load_config();
        let theme = Theme::from_name(&config.theme.name);
        Self::with_store(TaskStore::open_default(), theme)
    }

    /// 以给定的存储和主题创建应用（测试时注入临时目录存储）
    pub fn with_store(mut store: TaskStore, theme: Theme) -> Self {
        // 订阅存储变更，触发重绘
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_tasks| flag.set(true));

        let mut list_state = ListState::default();
        if !store.tasks().is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            store,
            list_state,
            show_add_dialog: false,
            add_input: String::new(),
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            dirty,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 标记需要重绘
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// 取出并清除重绘标记
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    /// 更新 Toast 状态，过期则移除
    pub fn update_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.is_expired() {
                self.toast = None;
                self.mark_dirty();
            }
        }
    }

    /// 显示 Toast 提示
    pub fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
        self.mark_dirty();
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let list_len = self.store.tasks().len();
        if list_len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % list_len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let list_len = self.store.tasks().len();
        if list_len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { list_len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 删除后修正选中项，保证仍指向有效位置
    fn ensure_selection(&mut self) {
        let list_len = self.store.tasks().len();
        if list_len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.min(list_len - 1)));
    }

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(pos) = self.list_state.selected() {
            self.store.toggle_completed(pos);
        }
    }

    /// 删除选中的任务
    pub fn delete_selected(&mut self) {
        if let Some(pos) = self.list_state.selected() {
            self.store.delete_tasks(&[pos]);
            self.ensure_selection();
            self.set_toast("Task deleted");
        }
    }

    /// 打开 Add Task 弹窗
    pub fn open_add_dialog(&mut self) {
        self.show_add_dialog = true;
        self.add_input.clear();
    }

    /// 关闭 Add Task 弹窗
    pub fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
    }

    pub fn add_input_char(&mut self, c: char) {
        self.add_input.push(c);
    }

    pub fn add_delete_char(&mut self) {
        self.add_input.pop();
    }

    /// 提交新任务
    ///
    /// 标题为空时不提交（非空校验属于表现层，存储不做检查）。
    pub fn submit_new_task(&mut self) {
        let title = self.add_input.trim();
        if title.is_empty() {
            return;
        }
        self.store.add_task(title);
        self.close_add_dialog();

        // 新任务追加在末尾，选中它
        let list_len = self.store.tasks().len();
        self.list_state.select(Some(list_len - 1));
    }

    /// 切换主题并保存配置
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.colors = get_theme_colors(self.theme);
        let _ = config::save_config(&Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        });
        self.mark_dirty();
    }
}
