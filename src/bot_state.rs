use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::{Mutex, RwLock};

use crate::content::Content;
use crate::models::UserRecord;

type UserMap = Arc<RwLock<HashMap<ChatId, Arc<Mutex<UserRecord>>>>>;

/// Общее состояние бота: записи пользователей и статичный контент.
/// Клонируется дешево, внешняя блокировка карты держится только на
/// время поиска записи — сами записи защищены личными мьютексами,
/// поэтому разные пользователи друг друга не ждут.
#[derive(Clone)]
pub struct BotState {
    users: UserMap,
    content: Arc<Content>,
}

impl BotState {
    pub fn new(content: Content) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            content: Arc::new(content),
        }
    }

    /// Запись пользователя, с ленивым созданием при первом обращении.
    pub async fn entry(&self, chat_id: ChatId) -> Arc<Mutex<UserRecord>> {
        {
            let users = self.users.read().await;
            if let Some(record) = users.get(&chat_id) {
                return Arc::clone(record);
            }
        }
        let mut users = self.users.write().await;
        Arc::clone(
            users
                .entry(chat_id)
                .or_insert_with(|| Arc::new(Mutex::new(UserRecord::default()))),
        )
    }

    /// Только поиск, без создания записи.
    pub async fn get(&self, chat_id: ChatId) -> Option<Arc<Mutex<UserRecord>>> {
        self.users.read().await.get(&chat_id).map(Arc::clone)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog;
    use crate::models::ConversationState;

    #[tokio::test]
    async fn entry_creates_record_once() {
        let state = BotState::new(Content::new());
        let chat = ChatId(1);

        assert!(state.get(chat).await.is_none());

        let first = state.entry(chat).await;
        let second = state.entry(chat).await;
        assert!(Arc::ptr_eq(&first, &second));
        assert!(state.get(chat).await.is_some());
    }

    #[tokio::test]
    async fn concurrent_users_do_not_observe_each_other() {
        let state = BotState::new(Content::new());

        let mut tasks = Vec::new();
        for (id, bedtime) in [(10_i64, "23:00"), (20, "22:15")] {
            let state = state.clone();
            tasks.push(tokio::spawn(async move {
                let record = state.entry(ChatId(id)).await;
                let mut record = record.lock().await;
                dialog::day_start(&mut record, "тест", state.content());
                dialog::bedtime_reply(&mut record, bedtime);
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let first = state.entry(ChatId(10)).await;
        let first = first.lock().await;
        let second = state.entry(ChatId(20)).await;
        let second = second.lock().await;

        assert_eq!(first.bedtime.unwrap().to_string(), "23:00");
        assert_eq!(second.bedtime.unwrap().to_string(), "22:15");
        assert_eq!(first.state, ConversationState::Idle);
        assert_eq!(second.state, ConversationState::Idle);
        assert_eq!(first.schedule, second.schedule);
    }

    #[tokio::test]
    async fn same_user_mutations_serialize() {
        let state = BotState::new(Content::new());
        let chat = ChatId(42);

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let state = state.clone();
            tasks.push(tokio::spawn(async move {
                let record = state.entry(chat).await;
                let mut record = record.lock().await;
                dialog::day_start(&mut record, "тест", state.content());
                dialog::bedtime_reply(&mut record, "21:45");
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let record = state.entry(chat).await;
        let record = record.lock().await;
        // Какой бы таск ни был последним, запись цельная.
        assert_eq!(record.bedtime.unwrap().to_string(), "21:45");
        assert_eq!(record.state, ConversationState::Idle);
    }
}
