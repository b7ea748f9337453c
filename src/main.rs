mod app;
mod error;
mod event;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use ratatui::DefaultTerminal;

use app::App;

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 仅在有变更时重绘（存储的变更通知或按键/窗口事件置位）
        if app.take_dirty() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
