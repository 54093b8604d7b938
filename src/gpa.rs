//! GPA calculation

use crate::consts::EMPTY_GPA;
use crate::records::AssignmentRecord;

/// Arithmetic mean of all grades (None when there are no records)
pub fn mean_grade(records: &[AssignmentRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(|r| r.grade).sum();
    Some(total / records.len() as f64)
}

/// GPA formatted to two decimal places, `"0.00"` for an empty list
pub fn calculate_gpa(records: &[AssignmentRecord]) -> String {
    match mean_grade(records) {
        Some(mean) => format!("{:.2}", mean),
        None => EMPTY_GPA.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(grades: &[f64]) -> Vec<AssignmentRecord> {
        grades
            .iter()
            .enumerate()
            .map(|(i, &grade)| AssignmentRecord {
                name: format!("HW{}", i + 1),
                grade,
            })
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_gpa(&[]), "0.00");
        assert_eq!(mean_grade(&[]), None);
    }

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(calculate_gpa(&records(&[4.0, 3.0])), "3.50");
        assert_eq!(calculate_gpa(&records(&[5.0])), "5.00");
        assert_eq!(calculate_gpa(&records(&[1.0, 2.0, 2.0])), "1.67");
        assert_eq!(calculate_gpa(&records(&[4.25, 4.5])), "4.38");
    }

    #[test]
    fn test_repeatable() {
        let list = records(&[2.5, 3.5, 4.5]);
        assert_eq!(calculate_gpa(&list), calculate_gpa(&list));
        assert_eq!(list.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_gpa_is_formatted_mean(grades in prop::collection::vec(1.0f64..=5.0, 1..40)) {
            let list = records(&grades);
            let mean = grades.iter().sum::<f64>() / grades.len() as f64;
            let gpa = calculate_gpa(&list);

            prop_assert_eq!(&gpa, &format!("{:.2}", mean));
            let (_, decimals) = gpa.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 2);

            let value: f64 = gpa.parse().unwrap();
            prop_assert!((1.0..=5.0).contains(&value));
        }
    }
}
