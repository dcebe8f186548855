use crate::error::SldError;
use crate::model::{AbbreviationTable, BreakerInstance, BreakerSummary, SummaryRecord};

/// Numeric amperes of a rating token such as "1200A".
pub fn rating_amps(rating: &str) -> Result<u32, SldError> {
    rating
        .strip_suffix('A')
        .unwrap_or(rating)
        .parse()
        .map_err(|_| SldError::RatingFormat {
            rating: rating.to_string(),
        })
}

/// Resolve type codes against the legend, group identical breakers, and
/// order the groups by descending rating.
///
/// Groups keep first-seen order among equal ratings. A rating that is not
/// a whole number of amperes fails the whole call.
pub fn summarize(
    instances: &[BreakerInstance],
    abbreviations: &AbbreviationTable,
) -> Result<BreakerSummary, SldError> {
    let mut records: Vec<SummaryRecord> = Vec::new();

    for instance in instances {
        let breaker_type = abbreviations.resolve(&instance.breaker_type);
        match records.iter_mut().find(|r| {
            r.breaker_type == breaker_type
                && r.rating == instance.rating
                && r.poles == instance.poles
        }) {
            Some(record) => record.count += 1,
            None => records.push(SummaryRecord {
                breaker_type: breaker_type.to_string(),
                rating: instance.rating.clone(),
                poles: instance.poles.clone(),
                count: 1,
            }),
        }
    }

    let mut keyed = records
        .into_iter()
        .map(|r| Ok((rating_amps(&r.rating)?, r)))
        .collect::<Result<Vec<(u32, SummaryRecord)>, SldError>>()?;
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(
        instances = instances.len(),
        groups = keyed.len(),
        "aggregated breakers"
    );

    Ok(BreakerSummary {
        records: keyed.into_iter().map(|(_, r)| r).collect(),
    })
}
