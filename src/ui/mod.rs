pub mod app;
pub mod response_table;
pub mod upload_history;
pub mod upload_panel;
pub mod uploads;
