pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use self::components::{add_task_dialog, empty_state, footer, header, task_list, toast};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let tasks = app.store.tasks();
    let open_count = tasks.iter().filter(|t| !t.is_completed).count();

    // 渲染 Header
    header::render(frame, header_area, open_count, tasks.len(), colors);

    // 渲染任务列表或空状态
    if tasks.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(frame, list_area, tasks, app.list_state.selected(), colors);
    }

    // 渲染 Footer
    footer::render(frame, footer_area, !tasks.is_empty(), colors);

    // 渲染 Add Task 弹窗
    if app.show_add_dialog {
        add_task_dialog::render(frame, &app.add_input, colors);
    }

    // 渲染 Toast
    if let Some(t) = &app.toast {
        toast::render(frame, &t.message, colors);
    }
}
