//! Screen CSV conversion.
//!
//! The screen master is maintained by hand as a CSV. Relevant columns:
//! 1 is the screen branch code, 3 and 4 the Japanese and English names,
//! 7 the seat count. Remaining columns are legacy and ignored.

use serde::Serialize;
use tessera_store::{GoodType, MultilingualString};

use crate::seats::Seat;
use crate::{Result, VenueError};

const MIN_COLUMNS: usize = 8;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub branch_code: String,

    pub name: MultilingualString,

    pub type_of: GoodType,

    /// Seats numbered `0001`..`NNNN` in order
    pub seats: Vec<Seat>,
}

/// Parse the screen CSV into screen records. Empty lines are skipped; a row
/// with too few columns or a non-numeric seat count fails the whole
/// conversion.
pub fn screens_from_csv(input: &str) -> Result<Vec<Screen>> {
    let mut screens = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = line.split(',').map(str::trim).collect();
        if columns.len() < MIN_COLUMNS {
            return Err(VenueError::MalformedRow {
                line: line_no + 1,
                expected: MIN_COLUMNS,
                actual: columns.len(),
            });
        }

        let seat_count: usize =
            columns[7].parse().map_err(|_| VenueError::InvalidSeatCount {
                line: line_no + 1,
                value: columns[7].to_string(),
            })?;

        let seats = (1..=seat_count)
            .map(|n| Seat::new(format!("{:04}", n)))
            .collect();

        screens.push(Screen {
            branch_code: columns[1].to_string(),
            name: MultilingualString::new(columns[3], columns[4]),
            type_of: GoodType::Screen,
            seats,
        });
    }
    Ok(screens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_produces_numbered_seats() {
        let csv = "118,001,0,ScreenJA,ScreenEN,0,0,10\n";
        let screens = screens_from_csv(csv).unwrap();
        assert_eq!(screens.len(), 1);

        let screen = &screens[0];
        assert_eq!(screen.name, MultilingualString::new("ScreenJA", "ScreenEN"));
        assert_eq!(screen.seats.len(), 10);
        assert_eq!(screen.seats.first().unwrap().branch_code, "0001");
        assert_eq!(screen.seats.last().unwrap().branch_code, "0010");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let csv = "\n118,001,0,A,B,0,0,2\n\n118,002,0,C,D,0,0,3\n";
        let screens = screens_from_csv(csv).unwrap();
        assert_eq!(screens.len(), 2);
        assert_eq!(screens[1].branch_code, "002");
        assert_eq!(screens[1].seats.len(), 3);
    }

    #[test]
    fn test_short_row_rejected() {
        let err = screens_from_csv("118,001,0,A,B\n").unwrap_err();
        assert!(matches!(err, VenueError::MalformedRow { line: 1, actual: 5, .. }));
    }

    #[test]
    fn test_bad_seat_count_rejected() {
        let err = screens_from_csv("118,001,0,A,B,0,0,ten\n").unwrap_err();
        assert!(matches!(err, VenueError::InvalidSeatCount { line: 1, .. }));
    }
}
