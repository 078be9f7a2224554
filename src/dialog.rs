use chrono::Local;
use std::fmt::Write as _;

use crate::content::Content;
use crate::models::{Bedtime, ConversationState, ScheduleEntry, UserRecord};

/// Ответ перехода: текст и признак HTML-разметки
/// (жирные слоты расписания).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
        }
    }

    fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: true,
        }
    }
}

fn format_schedule(schedule: &[ScheduleEntry]) -> String {
    let mut text = String::new();
    for entry in schedule {
        let _ = writeln!(text, "<b>{}</b>: {}", entry.slot, entry.task);
    }
    text
}

/// /daystart: новый день. Сбрасывает весь цикл — расписание копируется
/// из шаблона, отбой и вчерашние итоги очищаются.
pub fn day_start(record: &mut UserRecord, user_name: &str, content: &Content) -> Reply {
    record.schedule = content.default_schedule().to_vec();
    record.bedtime = None;
    record.last_review = None;
    record.review_date = None;
    record.state = ConversationState::AwaitingBedtime;

    Reply::html(format!(
        "Доброе утро, {}! ☀️\n\n\
         {}\n\n\
         📅 <b>Твой план на сегодня:</b>\n\n\
         {}\n\
         Во сколько ты планируешь лечь спать сегодня? (например, 23:00 или 23:30)",
        user_name,
        content.random_morning_quote(),
        format_schedule(&record.schedule),
    ))
}

/// Свободный текст в состоянии AwaitingBedtime. Неудачный разбор —
/// мягкая ошибка: переспрашиваем, состояние и факты не трогаем.
pub fn bedtime_reply(record: &mut UserRecord, text: &str) -> Reply {
    let bedtime = match Bedtime::parse(text) {
        Ok(bedtime) => bedtime,
        Err(_) => {
            return Reply::plain(
                "Пожалуйста, введите время в формате ЧЧ:ММ (например, 23:00 или 08:30)",
            );
        }
    };

    record.bedtime = Some(bedtime);
    record.state = ConversationState::Idle;

    Reply::plain(format!(
        "⏰ Отлично! Записал твой отбой на {}. Идеальное время подъема: {}\n\n\
         Не забывай отмечать задачи командой /taskdone по мере выполнения! \
         А вечером напиши /dayfinish для подведения итогов дня.",
        bedtime,
        bedtime.wake_time(),
    ))
}

/// /dayfinish: просим итоги дня. Расписание и отбой не трогаем,
/// предыдущий /daystart не обязателен.
pub fn day_finish(record: &mut UserRecord) -> Reply {
    record.state = ConversationState::AwaitingDayReview;

    Reply::plain(
        "Молодец, что завершаешь день осознанно! 👍\n\n\
         Как прошел твой день? Напиши пару предложений:\n\
         • Что получилось хорошо?\n\
         • Что можно улучшить завтра?\n\n\
         Это поможет стать еще продуктивнее!",
    )
}

/// Свободный текст в состоянии AwaitingDayReview: принимаем как есть,
/// штампуем дату, возвращаемся в Idle.
pub fn review_reply(record: &mut UserRecord, text: &str, content: &Content) -> Reply {
    record.last_review = Some(text.to_string());
    record.review_date = Some(Local::now().date_naive());
    record.state = ConversationState::Idle;

    let bedtime = record
        .bedtime
        .map(|bt| bt.to_string())
        .unwrap_or_else(|| "23:00".to_string());

    Reply::plain(format!(
        "Спасибо за отчет! Ты большой(ая) молодец! 🙌\n\n\
         {}\n\n\
         Твой отбой в {}. Приятных снов! 😴",
        content.random_evening_quote(),
        bedtime,
    ))
}

/// /cancel: выходим из диалога, факты не трогаем.
pub fn cancel(record: &mut UserRecord) -> Reply {
    record.state = ConversationState::Idle;

    Reply::plain("Диалог отменен. Используй /daystart чтобы начать день заново.")
}

/// /showtoday: личное расписание, а до первого /daystart — шаблон.
/// Состояние диалога не читает и не меняет.
pub fn show_today(record: Option<&UserRecord>, content: &Content) -> Reply {
    let schedule = match record {
        Some(record) if !record.schedule.is_empty() => &record.schedule[..],
        _ => content.default_schedule(),
    };

    Reply::html(format!(
        "📅 Ваше расписание на сегодня:\n\n{}",
        format_schedule(schedule),
    ))
}

/// /taskdone: похвала и случайная цитата, состояние не участвует.
pub fn task_done(content: &Content) -> Reply {
    Reply::plain(format!(
        "✅ Отлично! Вы молодец! Продолжайте в том же духе! 💪\n\n\
         {}\n\n\
         Что дальше?\n\
         /showtoday - Посмотреть расписание\n\
         /dayfinish - Подвести итоги дня",
        content.random_morning_quote(),
    ))
}

/// Текст вне диалога и неизвестные команды.
pub fn unrecognized() -> Reply {
    Reply::plain(
        "Я тебя не понял 🤔 Вот что я умею:\n\
         /daystart - начать день\n\
         /showtoday - расписание на сегодня\n\
         /taskdone - отметить выполненную задачу\n\
         /dayfinish - подвести итоги дня\n\
         /cancel - отменить текущий диалог",
    )
}

/// Маршрутизация свободного текста по текущему состоянию диалога.
pub fn handle_text(record: &mut UserRecord, text: &str, content: &Content) -> Reply {
    match record.state {
        ConversationState::AwaitingBedtime => bedtime_reply(record, text),
        ConversationState::AwaitingDayReview => review_reply(record, text, content),
        ConversationState::Idle => unrecognized(),
    }
}
