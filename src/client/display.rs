use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{dto::results::GameResultSummary, game::DRAW_LABEL};

/// Human readable outcome for a stored result.
pub fn describe_winner(winner: &str) -> String {
    if winner == DRAW_LABEL {
        "Draw".to_string()
    } else {
        format!("{winner} won")
    }
}

/// `YYYY-MM-DD HH:MM` rendering of an RFC 3339 timestamp, or the raw text
/// when it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(at) => format!(
            "{}-{:02}-{:02} {:02}:{:02}",
            at.year(),
            u8::from(at.month()),
            at.day(),
            at.hour(),
            at.minute()
        ),
        Err(_) => raw.to_string(),
    }
}

/// Two-column table of played games, newest first.
pub fn history_table(history: &[GameResultSummary]) -> String {
    let mut table = format!("{:<18} {}\n", "Date", "Result");
    for result in history {
        table.push_str(&format!(
            "{:<18} {}\n",
            format_timestamp(&result.created_at),
            describe_winner(&result.winner)
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn describes_wins_and_draws() {
        assert_eq!(describe_winner("O"), "O won");
        assert_eq!(describe_winner("draw"), "Draw");
    }

    #[test]
    fn formats_rfc3339_and_passes_through_garbage() {
        assert_eq!(format_timestamp("2026-10-15T08:05:59Z"), "2026-10-15 08:05");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn table_lists_rows_in_given_order() {
        let row = |winner: &str, at: &str| GameResultSummary {
            id: Uuid::new_v4(),
            winner: winner.into(),
            created_at: at.into(),
        };
        let table = history_table(&[
            row("X", "2026-10-15T10:00:00Z"),
            row("draw", "2026-10-15T09:00:00Z"),
        ]);

        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2026-10-15 10:00"));
        assert!(lines[1].ends_with("X won"));
        assert!(lines[2].ends_with("Draw"));
    }
}
