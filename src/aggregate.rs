use std::cmp::Reverse;

use ordered_float::NotNan;

use crate::models::Record;

/// How many countries the "top emitters" bar chart shows by default.
pub const TOP_EMITTER_LIMIT: usize = 10;

/// The largest emitters of the most recent year, biggest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TopEmitters {
    /// `None` when there was no data to pick a year from.
    pub year: Option<i32>,
    pub limit: usize,
    pub records: Vec<Record>,
}

impl TopEmitters {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Most recent year in `records`.
pub fn latest_year(records: &[Record]) -> Option<i32> {
    records.iter().map(|record| record.year).max()
}

/// Pick the `limit` rows of the latest year with the highest total CO₂.
///
/// Rows without a finite total CO₂ figure are never ranked. Countries with equal
/// emissions keep their file order.
pub fn top_emitters(records: &[Record], limit: usize) -> TopEmitters {
    let year = latest_year(records);

    let mut candidates: Vec<(NotNan<f64>, &Record)> = records
        .iter()
        .filter(|record| Some(record.year) == year)
        .filter_map(|record| {
            let co2 = record.co2.filter(|co2| co2.is_finite())?;
            Some((NotNan::new(co2).ok()?, record))
        })
        .collect();

    // sort_by_key is stable, so ties stay in file order
    candidates.sort_by_key(|(co2, _)| Reverse(*co2));

    TopEmitters {
        year,
        limit,
        records: candidates
            .into_iter()
            .take(limit)
            .map(|(_, record)| record.clone())
            .collect(),
    }
}
