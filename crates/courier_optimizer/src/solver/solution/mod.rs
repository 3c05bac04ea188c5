pub mod solution;
pub mod task_event;
