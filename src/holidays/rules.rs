use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Palette key; the rendering layer owns the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayColor {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LunarKind {
    LoyKrathong,
}

/// How a holiday resolves to a concrete date for a year. Exactly one
/// variant per rule; months are 1-12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RuleKind {
    Fixed { month: u32, day: u32 },
    #[serde(rename = "relative")]
    NthWeekday { month: u32, weekday: Weekday, nth: u8 },
    #[serde(rename = "easter")]
    EasterOffset { days: i64 },
    Lunar { kind: LunarKind },
    OneTime { year: i32, date: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayRule {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: HolidayColor,
    #[serde(flatten)]
    pub kind: RuleKind,
    #[serde(default)]
    pub is_custom: bool,
}

/// User input for a custom holiday; the service assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomHolidayDraft {
    pub name: String,
    pub emoji: String,
    pub color: HolidayColor,
    pub kind: RuleKind,
}

impl HolidayRule {
    pub fn custom(draft: CustomHolidayDraft) -> Self {
        Self {
            id: format!("custom-{}", Uuid::new_v4()),
            name: draft.name,
            emoji: draft.emoji,
            color: draft.color,
            kind: draft.kind,
            is_custom: true,
        }
    }
}

fn builtin(id: &str, name: &str, emoji: &str, color: HolidayColor, kind: RuleKind) -> HolidayRule {
    HolidayRule {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        color,
        kind,
        is_custom: false,
    }
}

/// The built-in holiday table shared by every compile.
pub fn builtin_rules() -> Vec<HolidayRule> {
    use HolidayColor::*;
    use RuleKind::*;

    vec![
        builtin("new-years-day", "New Year's Day", "🎉", Red, Fixed { month: 1, day: 1 }),
        builtin("valentines-day", "Valentine's Day", "💝", Pink, Fixed { month: 2, day: 14 }),
        builtin("palm-sunday", "Palm Sunday", "🌿", Green, EasterOffset { days: -7 }),
        builtin("good-friday", "Good Friday", "✝️", Purple, EasterOffset { days: -2 }),
        builtin("easter-sunday", "Easter Sunday", "🌅", Yellow, EasterOffset { days: 0 }),
        builtin("songkran", "Songkran", "💦", Teal, Fixed { month: 4, day: 13 }),
        builtin(
            "mothers-day-us",
            "Mother's Day (US)",
            "💐",
            Pink,
            NthWeekday { month: 5, weekday: Weekday::Sun, nth: 2 },
        ),
        builtin(
            "fathers-day-us",
            "Father's Day (US)",
            "👔",
            Blue,
            NthWeekday { month: 6, weekday: Weekday::Sun, nth: 3 },
        ),
        builtin(
            "loy-krathong",
            "Loy Krathong",
            "🏮",
            Orange,
            Lunar { kind: LunarKind::LoyKrathong },
        ),
        builtin(
            "thanksgiving-us",
            "Thanksgiving (US)",
            "🦃",
            Orange,
            NthWeekday { month: 11, weekday: Weekday::Thu, nth: 4 },
        ),
        builtin("christmas-eve", "Christmas Eve", "🕯️", Green, Fixed { month: 12, day: 24 }),
        builtin("christmas-day", "Christmas Day", "🎄", Red, Fixed { month: 12, day: 25 }),
        builtin("new-years-eve", "New Year's Eve", "🎆", Purple, Fixed { month: 12, day: 31 }),
    ]
}
