use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Per-depth counters of what the search did. Depth is the g-cost of the
/// node the event happened at.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created: Vec<u32>,
    expanded: Vec<u32>,
    duplicates: Vec<u32>,
    relaxations: u32,
    deadlocks: u32,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u32 {
        self.created.iter().sum()
    }

    pub fn total_expanded(&self) -> u32 {
        self.expanded.iter().sum()
    }

    pub fn total_duplicates(&self) -> u32 {
        self.duplicates.iter().sum()
    }

    pub fn relaxations(&self) -> u32 {
        self.relaxations
    }

    pub fn deadlocks(&self) -> u32 {
        self.deadlocks
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created, depth)
    }

    /// Returns true when this is the first node expanded at this depth.
    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicates, depth)
    }

    pub(crate) fn add_relaxation(&mut self) {
        self.relaxations += 1;
    }

    pub(crate) fn add_deadlock(&mut self) {
        self.deadlocks += 1;
    }

    fn add(counts: &mut Vec<u32>, depth: u32) -> bool {
        let mut new_depth = false;

        // while because relaxations can make the search skip depths
        while depth as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[depth as usize] += 1;
        new_depth
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "States created total: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "States expanded total: {}",
            self.total_expanded().separated_string()
        )?;
        writeln!(
            f,
            "Duplicates reached total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Cost relaxations total: {}",
            self.relaxations.separated_string()
        )?;
        writeln!(
            f,
            "Deadlocked pushes pruned: {}",
            self.deadlocks.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{0:<8}{1:<15}{2:<15}{3:<15}",
            "Depth", "Created", "Expanded", "Duplicates"
        )?;
        for depth in 0..self.created.len() {
            // created is always the longest vec
            let expanded = self.expanded.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicates.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{0:<8}{1:<15}{2:<15}{3:<15}",
                format!("{}:", depth),
                self.created[depth].separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
            )?;
        }
        Ok(())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "relaxations: {}", self.relaxations)?;
        write!(f, "deadlocks: {}", self.deadlocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_new_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(!stats.add_created(0));
        assert!(stats.add_created(1));
        assert!(stats.add_expanded(0));
        stats.add_relaxation();

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_duplicates(), 0);
        assert_eq!(stats.relaxations(), 1);
    }

    #[test]
    fn skipped_depths_are_filled_with_zeros() {
        let mut stats = Stats::new();
        assert!(stats.add_created(2));
        assert_eq!(stats.total_created(), 1);
        assert!(!stats.add_created(1));
    }
}
