use rand::seq::IndexedRandom;

use crate::models::ScheduleEntry;

// Расписание по умолчанию (можно менять)
const DEFAULT_SCHEDULE: &[(&str, &str)] = &[
    ("6:30 - 6:40", "Подъем и стакан воды"),
    ("6:40 - 7:30", "Велопоездка"),
    ("7:30 - 8:05", "Душ, завтрак, планирование задач"),
    ("8:05 - 15:05", "Рабочий блок (7 часов)"),
    ("15:05 - 15:30", "Подведение итогов дня, план на завтра"),
    ("15:30 - 16:15", "Отдых, душ, переодевание"),
    ("16:15 - 17:30", "Время с семьей / приготовление еды"),
    ("17:30 - 19:00", "Семейный ужин"),
    ("19:00 - 22:00", "Качественное время с семьей"),
    ("22:00 - 22:30", "Подготовка к следующему дню"),
    ("22:30 - 23:00", "Чтение, медитация, расслабление"),
];

// База мотивационных цитат
const MORNING_QUOTES: &[&str] = &[
    "Каждый продуктивный день начинается с правильного решения. Ты уже его принял(а)! 🚀",
    "Ты не procrastinator, ты doer! Просто иногда нужно напоминание. 😉",
    "Сосредоточься на одном деле. Потом на следующем. И так ты свернешь горы. ⛰️",
    "Даже самый длинный путь начинается с первого шага. Ты его уже сделал(а)! 👣",
    "Ты управляешь своим днем, а не день управляет тобой. 💪",
    "Успех — это сумма небольших усилий, повторяемых изо дня в день. Сегодня — очередной кирпичик в твоем успехе. 🧱",
];

const EVENING_QUOTES: &[&str] = &[
    "Сон — это суперсила продуктивных людей. Выспись хорошенько! 😴",
    "Завтра — новый день для новых свершений. Приятных снов! 🌙",
    "Ты сегодня хорошо потрудился(ась). Заслужил(а) отдых. Спокойной ночи! 💫",
];

/// Статичный контент бота: шаблон расписания и пулы цитат.
/// Собирается один раз на старте, дальше только чтение.
pub struct Content {
    schedule: Vec<ScheduleEntry>,
    morning_quotes: Vec<&'static str>,
    evening_quotes: Vec<&'static str>,
}

impl Content {
    pub fn new() -> Self {
        let content = Self {
            schedule: DEFAULT_SCHEDULE
                .iter()
                .map(|(slot, task)| ScheduleEntry::new(*slot, *task))
                .collect(),
            morning_quotes: MORNING_QUOTES.to_vec(),
            evening_quotes: EVENING_QUOTES.to_vec(),
        };
        // Инвариант старта: пулы непустые, дальше выбор цитаты не падает.
        assert!(!content.schedule.is_empty());
        assert!(!content.morning_quotes.is_empty());
        assert!(!content.evening_quotes.is_empty());
        content
    }

    pub fn default_schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn random_morning_quote(&self) -> &str {
        self.morning_quotes
            .choose(&mut rand::rng())
            .copied()
            .expect("morning quote pool is non-empty")
    }

    pub fn random_evening_quote(&self) -> &str {
        self.evening_quotes
            .choose(&mut rand::rng())
            .copied()
            .expect("evening quote pool is non-empty")
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::new()
    }
}
