use crate::constants::NULL_SENTINEL;
use crate::types::{NormalizedRecord, RawRecord};

/// Replace every `\N` cell with `None`; every other cell passes through untouched.
///
/// Runs before schema coercion so numeric coercers never see the sentinel.
pub fn normalize(record: RawRecord) -> NormalizedRecord {
    let values = record
        .values
        .into_iter()
        .map(|value| if value == NULL_SENTINEL { None } else { Some(value) })
        .collect();

    NormalizedRecord {
        line: record.line,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> RawRecord {
        RawRecord {
            line: 7,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_sentinel_becomes_none() {
        let normalized = normalize(raw(&["\\N", "-37.8497"]));

        assert_eq!(normalized.line, 7);
        assert_eq!(normalized.get(0), Some(None));
        assert_eq!(normalized.get(1), Some(Some("-37.8497")));
    }

    #[test]
    fn test_lookalikes_are_not_sentinels() {
        let normalized = normalize(raw(&["", "\\n", " \\N", "N"]));

        assert_eq!(normalized.get(0), Some(Some("")));
        assert_eq!(normalized.get(1), Some(Some("\\n")));
        assert_eq!(normalized.get(2), Some(Some(" \\N")));
        assert_eq!(normalized.get(3), Some(Some("N")));
    }

    #[test]
    fn test_cell_past_the_end_is_absent() {
        let normalized = normalize(raw(&["1"]));
        assert_eq!(normalized.get(1), None);
    }
}
