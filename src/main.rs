use teloxide::{prelude::*, utils::command::BotCommands};

mod bot_state;
mod content;
mod dialog;
mod handlers;
mod models;

use crate::bot_state::BotState;
use crate::content::Content;
use crate::handlers::{command_handler, message_handler};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать день и получить расписание")]
    DayStart,
    #[command(description = "начать день (то же, что /daystart)")]
    Start,
    #[command(description = "подвести итоги дня")]
    DayFinish,
    #[command(description = "расписание на сегодня")]
    ShowToday,
    #[command(description = "отметить выполненную задачу")]
    TaskDone,
    #[command(description = "отменить текущий диалог")]
    Cancel,
}

#[tokio::main]
async fn main() {
    // Загружаем .env и инициализируем логирование
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting daily routine bot...");

    let state = BotState::new(Content::new());
    let bot = Bot::from_env();

    // Команды разбираются первыми: активный диалог их не перекрывает.
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
