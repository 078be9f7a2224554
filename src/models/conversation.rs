/// Этап диалога, в котором находится пользователь.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    /// Нет активного диалога.
    #[default]
    Idle,
    /// Ждем время отбоя после /daystart.
    AwaitingBedtime,
    /// Ждем текст итогов дня после /dayfinish.
    AwaitingDayReview,
}
