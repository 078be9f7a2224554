pub mod commands;
pub mod messages;

pub use commands::command_handler;
pub use messages::message_handler;

use std::error::Error;

use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

use crate::dialog::Reply;

pub(crate) async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let request = bot.send_message(chat_id, reply.text);
    let request = if reply.html {
        request.parse_mode(ParseMode::Html)
    } else {
        request
    };
    request.await?;
    Ok(())
}

/// Граница ошибок диспетчера: любая ошибка обработки логируется и
/// превращается в одно общее извинение, наружу ничего не уходит —
/// падение на одном событии не задевает остальных пользователей.
pub(crate) async fn report_failure(bot: &Bot, chat_id: ChatId, err: Box<dyn Error + Send + Sync>) {
    log::error!("Ошибка при обработке события {}: {}", chat_id, err);
    if let Err(send_err) = bot
        .send_message(chat_id, "Произошла ошибка. Попробуйте еще раз.")
        .await
    {
        log::error!("Не удалось отправить извинение {}: {}", chat_id, send_err);
    }
}
