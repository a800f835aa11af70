use lt_core::{LumaError, Result, LEVEL_COUNT};
use serde::{Deserialize, Serialize};

/// Color count per brightness level, ascending by level.
///
/// Serialized as a bare JSON array of 256 integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountIndex {
    counts: Vec<u32>,
}

impl CountIndex {
    pub fn new(counts: Vec<u32>) -> Result<Self> {
        if counts.len() != LEVEL_COUNT {
            return Err(LumaError::Layout(format!(
                "count index has {} entries, expected {LEVEL_COUNT}",
                counts.len()
            )));
        }
        Ok(Self { counts })
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let counts: Vec<u32> = serde_json::from_slice(data)?;
        Self::new(counts)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn get(&self, level: u8) -> u32 {
        self.counts[level as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}
