use crate::domain::Transaction;

pub struct DedupService;

impl DedupService {
    /// Returns the incoming transactions that collide with an existing one
    /// on (date, amount, account), preserving input order. Descriptions and
    /// ids are ignored so re-imports of the same statement are caught even
    /// when the source assigns fresh ids.
    pub fn find_duplicates(
        incoming: &[Transaction],
        existing: &[Transaction],
    ) -> Vec<Transaction> {
        incoming
            .iter()
            .filter(|candidate| {
                existing.iter().any(|tx| {
                    tx.date == candidate.date
                        && (tx.amount - candidate.amount).abs() < f64::EPSILON
                        && tx.account == candidate.account
                })
            })
            .cloned()
            .collect()
    }
}
