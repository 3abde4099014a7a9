//! The stack of owned Pymons: one active, the rest benched. Defeat promotes
//! from the front of the bench; captures join at the back.

use std::collections::VecDeque;

use super::errors::GameError;
use super::types::Pymon;

#[derive(Debug)]
pub struct CreatureRoster {
    active: Pymon,
    bench: VecDeque<Pymon>,
}

impl CreatureRoster {
    pub fn new(active: Pymon) -> Self {
        Self {
            active,
            bench: VecDeque::new(),
        }
    }

    pub fn active(&self) -> &Pymon {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut Pymon {
        &mut self.active
    }

    pub fn bench(&self) -> impl Iterator<Item = &Pymon> {
        self.bench.iter()
    }

    pub fn bench_len(&self) -> usize {
        self.bench.len()
    }

    /// A freshly captured Pymon joins the back of the bench.
    pub fn adopt(&mut self, pymon: Pymon) {
        self.bench.push_back(pymon);
    }

    /// Promote the front bench Pymon after a defeat. The outgoing active is
    /// returned to the caller (it has left the party) along with a reference
    /// to the successor; `None` when the bench is empty.
    pub fn promote_front(&mut self) -> Option<(Pymon, &Pymon)> {
        let successor = self.bench.pop_front()?;
        let fallen = std::mem::replace(&mut self.active, successor);
        Some((fallen, &self.active))
    }

    /// Manual switch: the benched Pymon at `index` becomes active and the
    /// previous active joins the back of the bench. Bad indices change
    /// nothing.
    pub fn switch(&mut self, index: usize) -> Result<&Pymon, GameError> {
        let chosen = self.bench.remove(index).ok_or_else(|| {
            GameError::InvalidSelection(format!(
                "no benched Pymon at position {}",
                index + 1
            ))
        })?;
        let demoted = std::mem::replace(&mut self.active, chosen);
        self.bench.push_back(demoted);
        Ok(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pymon(name: &str) -> Pymon {
        Pymon::tame(name, "", "forest")
    }

    #[test]
    fn switch_demotes_previous_active_to_the_back() {
        let mut roster = CreatureRoster::new(pymon("Kimimon"));
        roster.adopt(pymon("Marimon"));
        roster.adopt(pymon("Tobimon"));

        roster.switch(1).unwrap();
        assert_eq!(roster.active().nickname, "Tobimon");
        let bench: Vec<_> = roster.bench().map(|p| p.nickname.as_str()).collect();
        assert_eq!(bench, vec!["Marimon", "Kimimon"]);
    }

    #[test]
    fn switch_out_of_range_changes_nothing() {
        let mut roster = CreatureRoster::new(pymon("Kimimon"));
        roster.adopt(pymon("Marimon"));

        assert!(roster.switch(5).is_err());
        assert_eq!(roster.active().nickname, "Kimimon");
        assert_eq!(roster.bench_len(), 1);
    }

    #[test]
    fn defeat_promotes_fifo() {
        let mut roster = CreatureRoster::new(pymon("Kimimon"));
        roster.adopt(pymon("Marimon"));
        roster.adopt(pymon("Tobimon"));

        let (fallen, successor) = roster.promote_front().unwrap();
        assert_eq!(fallen.nickname, "Kimimon");
        assert_eq!(successor.nickname, "Marimon");
        assert_eq!(roster.bench_len(), 1);
    }
}
