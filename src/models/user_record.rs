use chrono::NaiveDate;

use super::{Bedtime, ConversationState, ScheduleEntry};

/// Все, что бот знает об одном пользователе. Живет в памяти
/// до перезапуска процесса, создается при первом обращении.
#[derive(Debug, Clone, Default)]
pub struct UserRecord {
    /// Личная копия расписания, заполняется при /daystart.
    pub schedule: Vec<ScheduleEntry>,
    pub bedtime: Option<Bedtime>,
    pub last_review: Option<String>,
    pub review_date: Option<NaiveDate>,
    pub state: ConversationState,
}
