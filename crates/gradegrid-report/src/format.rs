//! Grade display formatting
//!
//! Pure conversion of a recorded grade into the string shown in one
//! sub-column. Absence always renders as the dash placeholder, which
//! also doubles as the non-submission signal consumed by the row
//! builder.

use crate::boundary::{BoundaryTable, NO_LETTER};
use crate::model::{DisplayType, GradeItem, GradeValue};

/// Placeholder for absent grades, equal to [`NO_LETTER`]
pub const ABSENT: &str = NO_LETTER;

/// Round half-up to two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `score` against `max`, or `None` when the maximum is
/// not positive
pub fn percentage_of(score: f64, max: f64) -> Option<f64> {
    if max > 0.0 {
        Some(score / max * 100.0)
    } else {
        None
    }
}

/// Render a number with its fraction trimmed when whole ("20" not
/// "20.0"), used for weights
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{}", round2(value))
    }
}

/// Render one weight cell, e.g. `20%`
pub fn format_weight(weight: f64) -> String {
    format!("{}%", format_number(weight))
}

/// Format a grade for one display type
///
/// Absent grades render as [`ABSENT`] for every display type. A
/// non-positive item maximum makes percentage and letter conversion
/// impossible; that is a data-quality problem in the gradebook, so it
/// is logged and rendered as [`ABSENT`] rather than aborting the
/// report.
pub fn format_grade(
    grade: Option<&GradeValue>,
    display: DisplayType,
    item: &GradeItem,
    boundaries: &BoundaryTable,
) -> String {
    let score = match grade.and_then(|g| g.score) {
        Some(score) => score,
        None => return ABSENT.to_string(),
    };

    match display {
        DisplayType::Real => format!("{:.2}", round2(score)),
        DisplayType::Percentage => match percentage_of(score, item.max) {
            // round() ties away from zero, which is half-up for the
            // non-negative grade range
            Some(pct) => format!("{}%", pct.round()),
            None => {
                log::warn!(
                    "item {:?} ({}) has non-positive max {}, cannot compute percentage",
                    item.id,
                    item.name,
                    item.max
                );
                ABSENT.to_string()
            }
        },
        DisplayType::Letter => match percentage_of(score, item.max) {
            Some(pct) => boundaries.letter_for(pct).to_string(),
            None => {
                log::warn!(
                    "item {:?} ({}) has non-positive max {}, cannot compute letter",
                    item.id,
                    item.name,
                    item.max
                );
                ABSENT.to_string()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, ItemKind};
    use pretty_assertions::assert_eq;

    fn item(max: f64) -> GradeItem {
        GradeItem {
            id: ItemId(1),
            kind: ItemKind::Assessment,
            name: "Assignment 1".to_string(),
            weight: 20.0,
            max,
        }
    }

    fn boundaries() -> BoundaryTable {
        BoundaryTable::new([(85.0, "A"), (70.0, "B"), (0.0, "F")]).unwrap()
    }

    #[test]
    fn test_absent_is_dash_for_every_display_type() {
        let item = item(100.0);
        let b = boundaries();
        for display in [DisplayType::Real, DisplayType::Percentage, DisplayType::Letter] {
            assert_eq!(format_grade(None, display, &item, &b), "-");
            let unscored = GradeValue::default();
            assert_eq!(format_grade(Some(&unscored), display, &item, &b), "-");
        }
    }

    #[test]
    fn test_real_rounds_to_two_decimals() {
        let item = item(100.0);
        let b = boundaries();
        let g = GradeValue::score(85.0);
        assert_eq!(format_grade(Some(&g), DisplayType::Real, &item, &b), "85.00");
        let g = GradeValue::score(66.666);
        assert_eq!(format_grade(Some(&g), DisplayType::Real, &item, &b), "66.67");
        let g = GradeValue::score(49.5);
        assert_eq!(format_grade(Some(&g), DisplayType::Real, &item, &b), "49.50");
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let item = item(100.0);
        let b = boundaries();
        let g = GradeValue::score(49.5);
        assert_eq!(
            format_grade(Some(&g), DisplayType::Percentage, &item, &b),
            "50%"
        );
        let g = GradeValue::score(85.0);
        assert_eq!(
            format_grade(Some(&g), DisplayType::Percentage, &item, &b),
            "85%"
        );
    }

    #[test]
    fn test_percentage_uses_item_max() {
        let item = item(40.0);
        let b = boundaries();
        let g = GradeValue::score(30.0);
        assert_eq!(
            format_grade(Some(&g), DisplayType::Percentage, &item, &b),
            "75%"
        );
        assert_eq!(format_grade(Some(&g), DisplayType::Letter, &item, &b), "B");
    }

    #[test]
    fn test_zero_max_renders_dash() {
        let item = item(0.0);
        let b = boundaries();
        let g = GradeValue::score(10.0);
        assert_eq!(
            format_grade(Some(&g), DisplayType::Percentage, &item, &b),
            "-"
        );
        assert_eq!(format_grade(Some(&g), DisplayType::Letter, &item, &b), "-");
        // The raw value is still renderable
        assert_eq!(format_grade(Some(&g), DisplayType::Real, &item, &b), "10.00");
    }

    #[test]
    fn test_weight_formatting() {
        assert_eq!(format_weight(20.0), "20%");
        assert_eq!(format_weight(12.5), "12.5%");
        assert_eq!(format_weight(0.0), "0%");
    }
}
