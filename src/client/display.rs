use chrono::{DateTime, FixedOffset, Offset, Utc};
use colored::Color;

/// Map a fixture difficulty rating (1 easiest - 5 hardest) to a color.
/// Unrecognized or missing ratings get the neutral fallback.
pub fn difficulty_color(difficulty: Option<u8>) -> Color {
    match difficulty {
        Some(1) => Color::BrightGreen,
        Some(2) => Color::Green,
        Some(3) => Color::Yellow,
        Some(4) => Color::Red,
        Some(5) => Color::BrightRed,
        _ => Color::White,
    }
}

/// Render a kickoff instant in the fixed dashboard timezone.
pub fn kickoff_local(kickoff: Option<DateTime<Utc>>, offset_mins: i32) -> String {
    let Some(instant) = kickoff else {
        return "TBC".to_string();
    };

    let zone = FixedOffset::east_opt(offset_mins * 60).unwrap_or_else(|| Utc.fix());
    instant.with_timezone(&zone).format("%a %d %b %H:%M").to_string()
}
