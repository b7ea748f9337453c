use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) => {
                // 只处理按下事件
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                    app.mark_dirty();
                }
            }
            Event::Resize(_, _) => app.mark_dirty(),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件
    if app.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 功能按键 - 添加任务
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.open_add_dialog();
        }

        // 功能按键 - 删除任务
        KeyCode::Char('x') => {
            app.delete_selected();
        }

        // 功能按键 - 切换主题
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认添加
        KeyCode::Enter => {
            app.submit_new_task();
        }

        // 取消
        KeyCode::Esc => {
            app.close_add_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.add_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.add_input_char(c);
        }

        _ => {}
    }
}
