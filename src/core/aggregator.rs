use crate::core::csv_line::{split_fields, trim_field};
use crate::core::postal_code::is_postal_code;
use crate::domain::model::Record;
use std::collections::BTreeMap;

/// Turns a data line into a record, or `None` when the line is discarded.
///
/// The first field wins when both of the first two fields look like postal
/// codes.
pub fn parse_record(line: &str) -> Option<Record> {
    if trim_field(line).is_empty() {
        return None;
    }

    let fields = split_fields(line);
    if fields.len() < 2 {
        return None;
    }

    let first = trim_field(&fields[0]);
    let second = trim_field(&fields[1]);

    let (postal_code, settlement) = if is_postal_code(first) {
        (first, second)
    } else if is_postal_code(second) {
        (second, first)
    } else {
        return None;
    };

    if postal_code.is_empty() || settlement.is_empty() {
        return None;
    }

    Some(Record {
        postal_code: postal_code.to_string(),
        settlement: settlement.to_string(),
    })
}

/// Settlements grouped by postal code.
///
/// Keys are kept sorted; settlement lists keep insertion order. The count
/// for a code is the length of its list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostalAggregator {
    settlements: BTreeMap<String, Vec<String>>,
}

impl PostalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) {
        self.settlements
            .entry(record.postal_code)
            .or_default()
            .push(record.settlement);
    }

    /// Returns true when the line contributed a record.
    pub fn process_line(&mut self, line: &str) -> bool {
        match parse_record(line) {
            Some(record) => {
                self.add(record);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, postal_code: &str) -> usize {
        self.settlements.get(postal_code).map_or(0, Vec::len)
    }

    pub fn settlements(&self, postal_code: &str) -> Option<&[String]> {
        self.settlements.get(postal_code).map(Vec::as_slice)
    }

    /// Postal codes with their counts, ascending.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.settlements
            .iter()
            .map(|(code, names)| (code.as_str(), names.len()))
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    pub fn total_settlements(&self) -> usize {
        self.settlements.values().map(Vec::len).sum()
    }
}
