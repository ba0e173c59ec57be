use super::action::Action;
use super::position::Position;
use crate::cards::class::Class;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// The embedded strategy artifact, parsed once at startup.
const RANGES: &str = include_str!("ranges.json");
/// Key of the per-position fallback entry.
const DEFAULT: &str = "default";

/// One recommendation in the strategy table.
///
/// `frequency` is the integer percentage of the time the recommended action
/// is taken at equilibrium; `rationale` is free text shown after grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub action: Action,
    pub frequency: u8,
    pub rationale: String,
}

/// One position's sub-table: explicit per-class entries plus the fallback.
#[derive(Debug, Clone)]
pub struct Range {
    default: Entry,
    entries: BTreeMap<Class, Entry>,
}

impl Range {
    /// The fallback entry for classes absent from this range.
    pub fn fallback(&self) -> &Entry {
        &self.default
    }
    /// Exact entry if present, else the fallback. Total over all classes.
    pub fn entry(&self, class: Class) -> &Entry {
        self.entries.get(&class).unwrap_or(&self.default)
    }
    /// Explicit entries in class order, for reference display.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Class, &Entry)> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full (position, hand class) strategy table.
///
/// Construction validates structure once: every seat present, a fallback per
/// seat, well-formed class keys, frequencies within 0..=100. Lookup after a
/// successful load never fails.
#[derive(Debug, Clone)]
pub struct Chart(BTreeMap<Position, Range>);

impl Chart {
    /// Parse and validate the embedded artifact.
    pub fn load() -> anyhow::Result<Self> {
        let chart = Self::parse(RANGES)?;
        log::info!(
            "loaded strategy chart: {} entries across {} seats",
            chart.0.values().map(Range::len).sum::<usize>(),
            chart.0.len(),
        );
        Ok(chart)
    }

    fn parse(json: &str) -> anyhow::Result<Self> {
        let mut raw = serde_json::from_str::<BTreeMap<Position, HashMap<String, Entry>>>(json)
            .context("malformed strategy artifact")?;
        let mut ranges = BTreeMap::new();
        for position in Position::all() {
            let mut entries = raw
                .remove(&position)
                .ok_or_else(|| anyhow::anyhow!("no range for position {}", position))?;
            let default = entries
                .remove(DEFAULT)
                .ok_or_else(|| anyhow::anyhow!("missing default entry for position {}", position))?;
            let entries = entries
                .into_iter()
                .map(|(key, entry)| {
                    Class::try_from(key.as_str())
                        .with_context(|| format!("bad class key in {} range", position))
                        .map(|class| (class, entry))
                })
                .collect::<anyhow::Result<BTreeMap<Class, Entry>>>()?;
            for entry in entries.values().chain(std::iter::once(&default)) {
                anyhow::ensure!(
                    entry.frequency <= 100,
                    "frequency out of range in {} entry: {}",
                    position,
                    entry.frequency,
                );
            }
            ranges.insert(position, Range { default, entries });
        }
        Ok(Self(ranges))
    }

    /// A position's sub-table.
    pub fn range(&self, position: Position) -> &Range {
        self.0.get(&position).expect("all positions validated at load")
    }
    /// Total lookup: the exact entry for (position, class), else that
    /// position's fallback.
    pub fn entry(&self, position: Position, class: Class) -> &Entry {
        self.range(position).entry(class)
    }
}
