use std::error::Error;

use teloxide::prelude::*;

use crate::bot_state::BotState;
use crate::dialog;
use crate::handlers::{report_failure, send_reply};
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Err(err) = dispatch(&bot, &msg, cmd, &state).await {
        report_failure(&bot, msg.chat.id, err).await;
    }
    Ok(())
}

async fn dispatch(
    bot: &Bot,
    msg: &Message,
    cmd: Command,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cmd {
        Command::DayStart | Command::Start => handle_day_start(bot, msg, state).await,
        Command::DayFinish => handle_day_finish(bot, msg, state).await,
        Command::ShowToday => handle_show_today(bot, msg, state).await,
        Command::TaskDone => handle_task_done(bot, msg, state).await,
        Command::Cancel => handle_cancel(bot, msg, state).await,
    }
}

async fn handle_day_start(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let user_name = msg
        .from()
        .map(|user| user.first_name.as_str())
        .unwrap_or("друг");

    let record = state.entry(msg.chat.id).await;
    // Переход фиксируется до отправки ответа, доставка его не откатит.
    let reply = {
        let mut record = record.lock().await;
        dialog::day_start(&mut record, user_name, state.content())
    };
    send_reply(bot, msg.chat.id, reply).await
}

async fn handle_day_finish(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let record = state.entry(msg.chat.id).await;
    let reply = {
        let mut record = record.lock().await;
        dialog::day_finish(&mut record)
    };
    send_reply(bot, msg.chat.id, reply).await
}

async fn handle_show_today(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let reply = match state.get(msg.chat.id).await {
        Some(record) => {
            let record = record.lock().await;
            dialog::show_today(Some(&record), state.content())
        }
        None => dialog::show_today(None, state.content()),
    };
    send_reply(bot, msg.chat.id, reply).await
}

async fn handle_task_done(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    send_reply(bot, msg.chat.id, dialog::task_done(state.content())).await
}

async fn handle_cancel(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let record = state.entry(msg.chat.id).await;
    let reply = {
        let mut record = record.lock().await;
        dialog::cancel(&mut record)
    };
    send_reply(bot, msg.chat.id, reply).await
}
