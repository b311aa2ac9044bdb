// Task-Modul: Enthält alle Embassy Tasks

pub mod console;

// Re-export Tasks für einfachen Import
pub use console::console_task;
