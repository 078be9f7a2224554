use std::fmt;

/// Сколько спать: 7 часов 30 минут.
const SLEEP_MINUTES: u32 = 7 * 60 + 30;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Время отбоя в формате ЧЧ:ММ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bedtime {
    pub hour: u8,
    pub minute: u8,
}

/// Почему введенное время не принято.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedtimeParseError {
    WrongLength,
    MissingSeparator,
    NotANumber,
    HourOutOfRange,
    MinuteOutOfRange,
}

impl Bedtime {
    /// Разбирает строку вида "23:00". Контракт валидации фиксированный:
    /// ровно 5 байт, двоеточие на позиции 2, час 0..=23, минута 0..=59.
    pub fn parse(text: &str) -> Result<Self, BedtimeParseError> {
        let bytes = text.as_bytes();
        if bytes.len() != 5 {
            return Err(BedtimeParseError::WrongLength);
        }
        if bytes[2] != b':' {
            return Err(BedtimeParseError::MissingSeparator);
        }
        // Байт 2 — ASCII-двоеточие, значит границы срезов корректны
        // даже для многобайтных символов по краям.
        let hour: u8 = text[..2]
            .parse()
            .map_err(|_| BedtimeParseError::NotANumber)?;
        let minute: u8 = text[3..]
            .parse()
            .map_err(|_| BedtimeParseError::NotANumber)?;
        if hour > 23 {
            return Err(BedtimeParseError::HourOutOfRange);
        }
        if minute > 59 {
            return Err(BedtimeParseError::MinuteOutOfRange);
        }
        Ok(Self { hour, minute })
    }

    /// Рекомендуемый подъем: отбой + 7:30, с переходом через полночь.
    pub fn wake_time(self) -> Bedtime {
        let total =
            (u32::from(self.hour) * 60 + u32::from(self.minute) + SLEEP_MINUTES) % MINUTES_PER_DAY;
        Bedtime {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
