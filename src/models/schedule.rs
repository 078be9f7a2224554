/// Одна строка расписания: временной слот и задача.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub slot: String,
    pub task: String,
}

impl ScheduleEntry {
    pub fn new(slot: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            task: task.into(),
        }
    }
}
