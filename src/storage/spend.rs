//! Spend repository for JSON storage
//!
//! Persists individual spend entries in spend.json and aggregates them per
//! period for the progress calculator.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PaceError, PaceResult};
use crate::models::{BudgetPeriod, CategoryKey, CategorySpend, Money, PeriodSpend, SpendEntry};

use super::json_file::JsonFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SpendData {
    /// Oldest first
    #[serde(default)]
    entries: Vec<SpendEntry>,
}

/// Repository for spend entry persistence
pub struct SpendRepository {
    file: JsonFile<SpendData>,
}

impl SpendRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn load(&self) -> PaceResult<()> {
        self.file.load()
    }

    /// Record an entry and persist it
    pub fn add(&self, entry: SpendEntry) -> PaceResult<()> {
        self.file.update(|data| {
            data.entries.push(entry);
            data.entries
                .sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
            Ok(())
        })
    }

    /// Remove the single entry whose ID matches `id`
    ///
    /// Ambiguous prefixes are rejected rather than removing several entries.
    pub fn remove(&self, id: &str) -> PaceResult<SpendEntry> {
        self.file.update(|data| {
            let matches: Vec<usize> = data
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.id.matches(id))
                .map(|(i, _)| i)
                .collect();

            match matches.as_slice() {
                [index] => Ok(data.entries.remove(*index)),
                [] => Err(PaceError::spend_not_found(id)),
                _ => Err(PaceError::Validation(format!(
                    "Spend ID '{}' matches {} entries",
                    id,
                    matches.len()
                ))),
            }
        })
    }

    /// Entries dated inside `period`, oldest first
    pub fn get_for_period(&self, period: &BudgetPeriod) -> PaceResult<Vec<SpendEntry>> {
        let mut list: Vec<SpendEntry> = self.file.read(|data| {
            data.entries
                .iter()
                .filter(|e| period.contains(e.date))
                .cloned()
                .collect()
        })?;
        list.sort_by_key(|e| e.date);
        Ok(list)
    }

    /// Spend per category within `period`
    pub fn category_totals(&self, period: &BudgetPeriod) -> PaceResult<Vec<CategorySpend>> {
        let mut totals: BTreeMap<CategoryKey, Money> = BTreeMap::new();
        for entry in self.get_for_period(period)? {
            *totals.entry(entry.category).or_default() += entry.amount;
        }
        Ok(totals
            .into_iter()
            .map(|(category, spend)| CategorySpend { category, spend })
            .collect())
    }

    /// Aggregate spend and calendar position for `period` as of `today`
    pub fn period_totals(
        &self,
        period: &BudgetPeriod,
        today: NaiveDate,
    ) -> PaceResult<PeriodSpend> {
        let total_spend: Money = self.get_for_period(period)?.iter().map(|e| e.amount).sum();
        Ok(PeriodSpend::new(
            total_spend,
            period.days_elapsed(today),
            period.days_in_month(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_repo() -> (TempDir, SpendRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = SpendRepository::new(temp_dir.path().join("spend.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn spend(d: NaiveDate, key: &str, units: i64) -> SpendEntry {
        SpendEntry::new(d, CategoryKey::new(key), Money::from_units(units))
    }

    #[test]
    fn test_period_aggregation() {
        let (_temp_dir, repo) = create_test_repo();
        repo.add(spend(date(2025, 6, 2), "groceries", 40)).unwrap();
        repo.add(spend(date(2025, 6, 9), "groceries", 60)).unwrap();
        repo.add(spend(date(2025, 6, 9), "dining", 25)).unwrap();
        repo.add(spend(date(2025, 5, 30), "dining", 99)).unwrap();

        let june = BudgetPeriod::monthly(2025, 6);
        let totals = repo.category_totals(&june).unwrap();
        assert_eq!(
            totals,
            vec![
                CategorySpend::new("dining", Money::from_units(25)),
                CategorySpend::new("groceries", Money::from_units(100)),
            ]
        );

        let period = repo.period_totals(&june, date(2025, 6, 10)).unwrap();
        assert_eq!(period.total_spend, Money::from_units(125));
        assert_eq!(period.days_elapsed, 10);
        assert_eq!(period.days_in_month, 30);
    }

    #[test]
    fn test_empty_period() {
        let (_temp_dir, repo) = create_test_repo();
        let june = BudgetPeriod::monthly(2025, 6);
        assert!(repo.category_totals(&june).unwrap().is_empty());
        let period = repo.period_totals(&june, date(2025, 6, 1)).unwrap();
        assert_eq!(period, PeriodSpend::empty(1, 30));
    }

    #[test]
    fn test_remove_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let entry = spend(date(2025, 6, 2), "fuel", 30);
        let id = entry.id;
        repo.add(entry).unwrap();

        let removed = repo.remove(&id.short()).unwrap();
        assert_eq!(removed.id, id);
        assert!(repo.remove(&id.short()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_ambiguous_remove_keeps_entries() {
        let (temp_dir, repo) = create_test_repo();
        for (day, id) in [
            (2, "abcd0000-0000-4000-8000-000000000001"),
            (3, "abcd0000-0000-4000-8000-000000000002"),
        ] {
            let mut entry = spend(date(2025, 6, day), "fuel", 10);
            entry.id = id.parse().unwrap();
            repo.add(entry).unwrap();
        }

        assert!(repo.remove("abcd").unwrap_err().is_validation());

        let reopened = SpendRepository::new(temp_dir.path().join("spend.json"));
        reopened.load().unwrap();
        let june = BudgetPeriod::monthly(2025, 6);
        assert_eq!(reopened.get_for_period(&june).unwrap().len(), 2);
        assert_eq!(repo.get_for_period(&june).unwrap().len(), 2);
    }

    #[test]
    fn test_add_persists_oldest_first() {
        let (temp_dir, repo) = create_test_repo();
        repo.add(spend(date(2025, 6, 9), "fuel", 30)).unwrap();
        repo.add(spend(date(2025, 6, 2), "fuel", 12)).unwrap();

        let repo2 = SpendRepository::new(temp_dir.path().join("spend.json"));
        repo2.load().unwrap();
        let june = repo2.get_for_period(&BudgetPeriod::monthly(2025, 6)).unwrap();
        assert_eq!(june.len(), 2);
        assert_eq!(june[0].amount, Money::from_units(12));
        assert_eq!(june[1].date, date(2025, 6, 9));
    }
}
