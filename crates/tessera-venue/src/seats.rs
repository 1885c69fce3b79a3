//! Seat layout generator.
//!
//! The auditorium layout is hand-coded as per-column seat-number ranges,
//! both bounds inclusive. Column letters skip `I` to avoid confusion with
//! the digit 1 on printed tickets.

use serde::Serialize;
use tessera_store::GoodType;

/// One physical seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// `{column}-{number}` for the auditorium layout, zero-padded ordinal
    /// for generated screens
    pub branch_code: String,

    pub type_of: GoodType,
}

impl Seat {
    pub fn new(branch_code: impl Into<String>) -> Self {
        Self {
            branch_code: branch_code.into(),
            type_of: GoodType::Seat,
        }
    }
}

/// Column letter with inclusive first and last seat numbers.
const SEAT_RANGES: &[(&str, u32, u32)] = &[
    ("A", 4, 22),
    ("B", 3, 23),
    ("C", 2, 24),
    ("D", 2, 24),
    ("E", 1, 25),
    ("F", 1, 25),
    ("G", 1, 25),
    ("H", 2, 24),
    ("J", 2, 24),
    ("K", 3, 23),
    ("L", 4, 22),
];

/// Build the full seat list, column-major in table order.
pub fn create_seats() -> Vec<Seat> {
    let mut seats = Vec::new();
    for (column, first, last) in SEAT_RANGES {
        for number in *first..=*last {
            seats.push(Seat::new(format!("{}-{}", column, number)));
        }
    }
    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_a_range() {
        let seats: Vec<Seat> = create_seats()
            .into_iter()
            .filter(|s| s.branch_code.starts_with("A-"))
            .collect();
        assert_eq!(seats.len(), 19);
        assert_eq!(seats.first().unwrap().branch_code, "A-4");
        assert_eq!(seats.last().unwrap().branch_code, "A-22");
        assert!(seats.iter().all(|s| s.type_of == GoodType::Seat));
    }

    #[test]
    fn test_total_matches_range_table() {
        let expected: u32 = SEAT_RANGES.iter().map(|(_, f, l)| l - f + 1).sum();
        assert_eq!(create_seats().len(), expected as usize);
    }

    #[test]
    fn test_serialized_shape() {
        let seat = &create_seats()[0];
        let value = serde_json::to_value(seat).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "branchCode": "A-4", "typeOf": "Seat" })
        );
    }
}
