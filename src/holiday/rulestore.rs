use std::fs::File;
use std::io::BufReader;

use log::debug;

use crate::holiday::holidayerror::RuleStoreError;
use crate::holiday::holidayrule::HolidayRule;

/// Read-only access to the holiday rule collection.
///
/// Implementations hand out an immutable ordered snapshot per call; the
/// engine never writes back and never assumes a snapshot stays valid
/// beyond the call that received it.
pub trait RuleStore: Send + Sync {
    fn load_rules(&self) -> Vec<HolidayRule>;
}

pub struct InMemoryRuleStore {
    rules: Vec<HolidayRule>
}

impl InMemoryRuleStore {
    pub fn new(rules: Vec<HolidayRule>) -> InMemoryRuleStore {
        InMemoryRuleStore { rules }
    }

    /// Loads a rule collection from a file holding a JSON array of rule
    /// records.
    pub fn from_reader(file_path: String) -> Result<InMemoryRuleStore, RuleStoreError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let rules: Vec<HolidayRule> = serde_json::from_reader(reader)?;
        debug!("loaded {} holiday rules", rules.len());
        Ok(InMemoryRuleStore::new(rules))
    }
}

impl RuleStore for InMemoryRuleStore {
    fn load_rules(&self) -> Vec<HolidayRule> {
        self.rules.clone()
    }
}
