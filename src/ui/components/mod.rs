pub mod add_task_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod logo;
pub mod task_list;
pub mod toast;
