pub mod bedtime;
pub mod conversation;
pub mod schedule;
pub mod user_record;

pub use bedtime::{Bedtime, BedtimeParseError};
pub use conversation::ConversationState;
pub use schedule::ScheduleEntry;
pub use user_record::UserRecord;
