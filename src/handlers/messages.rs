use std::error::Error;

use teloxide::prelude::*;

use crate::bot_state::BotState;
use crate::dialog;
use crate::handlers::{report_failure, send_reply};

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Err(err) = dispatch(&bot, &msg, &state).await {
        report_failure(&bot, msg.chat.id, err).await;
    }
    Ok(())
}

async fn dispatch(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        // Стикеры, фото и прочее — диалогам нужен текст.
        return send_reply(bot, msg.chat.id, dialog::unrecognized()).await;
    };

    // Известные команды перехватила ветка командного обработчика,
    // сюда доходят только неизвестные. В диалог их не пускаем.
    if text.starts_with('/') {
        return send_reply(bot, msg.chat.id, dialog::unrecognized()).await;
    }

    let record = state.entry(msg.chat.id).await;
    let reply = {
        let mut record = record.lock().await;
        dialog::handle_text(&mut record, text, state.content())
    };
    send_reply(bot, msg.chat.id, reply).await
}
