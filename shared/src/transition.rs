//! Enter/exit transition bookkeeping for the animated accordion.
//!
//! Content of an item is mounted from the moment it starts entering until
//! its exit transition has finished. Every phase change hands out a
//! [`TransitionTicket`]; the owner arms a one-shot timer with it and reports
//! back through `complete` when the timer fires. A ticket is only honoured
//! while it is the newest one issued for its item, so a timer left over from
//! a superseded toggle does nothing.

use std::collections::BTreeMap;

use crate::config::TransitionConfig;
use crate::state::ExclusiveState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Entering,
    Open,
    Exiting,
}

impl Phase {
    /// Whether content for an item in this phase is present in the tree.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Phase::Closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    pub index: usize,
    generation: u64,
}

/// A transition that has started and must be completed after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: TransitionTicket,
    pub delay_ms: u32,
}

/// Per-item transition phases. Items without an entry are `Closed`.
#[derive(Debug, Clone, Default)]
pub struct TransitionSet {
    phases: BTreeMap<usize, (Phase, u64)>,
    next_generation: u64,
}

impl TransitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, index: usize) -> Phase {
        self.phases
            .get(&index)
            .map(|(phase, _)| *phase)
            .unwrap_or_default()
    }

    /// Start the enter transition. No-op while already entering or open.
    pub fn enter(&mut self, index: usize) -> Option<TransitionTicket> {
        match self.phase(index) {
            Phase::Entering | Phase::Open => None,
            Phase::Closed | Phase::Exiting => Some(self.begin(index, Phase::Entering)),
        }
    }

    /// Start the exit transition. No-op while closed or already exiting.
    pub fn exit(&mut self, index: usize) -> Option<TransitionTicket> {
        match self.phase(index) {
            Phase::Closed | Phase::Exiting => None,
            Phase::Entering | Phase::Open => Some(self.begin(index, Phase::Exiting)),
        }
    }

    /// Finish the transition `ticket` was issued for. Returns the resulting
    /// phase, or `None` if the ticket has been superseded.
    pub fn complete(&mut self, ticket: TransitionTicket) -> Option<Phase> {
        let (phase, generation) = self.phases.get(&ticket.index).copied()?;
        if generation != ticket.generation {
            return None;
        }

        match phase {
            Phase::Entering => {
                self.phases.insert(ticket.index, (Phase::Open, generation));
                Some(Phase::Open)
            }
            Phase::Exiting => {
                self.phases.remove(&ticket.index);
                Some(Phase::Closed)
            }
            Phase::Open | Phase::Closed => None,
        }
    }

    /// Indices whose content is currently mounted.
    pub fn mounted(&self) -> impl Iterator<Item = usize> + '_ {
        self.phases.keys().copied()
    }

    fn begin(&mut self, index: usize, phase: Phase) -> TransitionTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.phases.insert(index, (phase, generation));
        TransitionTicket { index, generation }
    }
}

/// Exclusive selection plus the transitions it drives.
#[derive(Debug, Clone, Default)]
pub struct AnimatedState {
    selection: ExclusiveState,
    transitions: TransitionSet,
    config: TransitionConfig,
}

impl AnimatedState {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.selection.open_index()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.selection.is_open(index)
    }

    pub fn phase(&self, index: usize) -> Phase {
        self.transitions.phase(index)
    }

    pub fn is_mounted(&self, index: usize) -> bool {
        self.phase(index).is_mounted()
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Toggle `index` the way the basic accordion does and start the
    /// transitions that follow from it. The caller arms one timer per
    /// returned entry.
    pub fn toggle(&mut self, index: usize) -> Vec<Scheduled> {
        let previous = self.selection.open_index();
        let next = self.selection.toggle(index);

        let mut scheduled = Vec::with_capacity(2);
        if let Some(closed) = previous.filter(|&p| Some(p) != next) {
            if let Some(ticket) = self.transitions.exit(closed) {
                scheduled.push(Scheduled {
                    ticket,
                    delay_ms: self.config.exit_ms,
                });
            }
        }
        if let Some(opened) = next {
            if let Some(ticket) = self.transitions.enter(opened) {
                scheduled.push(Scheduled {
                    ticket,
                    delay_ms: self.config.enter_ms,
                });
            }
        }
        scheduled
    }

    pub fn complete(&mut self, ticket: TransitionTicket) -> Option<Phase> {
        self.transitions.complete(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_for(scheduled: &[Scheduled], index: usize) -> TransitionTicket {
        scheduled
            .iter()
            .find(|s| s.ticket.index == index)
            .map(|s| s.ticket)
            .unwrap()
    }

    #[test]
    fn test_enter_then_open() {
        let mut set = TransitionSet::new();
        let ticket = set.enter(0).unwrap();
        assert_eq!(set.phase(0), Phase::Entering);
        assert!(set.phase(0).is_mounted());

        assert_eq!(set.complete(ticket), Some(Phase::Open));
        assert_eq!(set.phase(0), Phase::Open);
        assert!(set.enter(0).is_none());
    }

    #[test]
    fn test_exit_keeps_content_mounted_until_complete() {
        let mut set = TransitionSet::new();
        let enter = set.enter(0).unwrap();
        set.complete(enter);

        let exit = set.exit(0).unwrap();
        assert_eq!(set.phase(0), Phase::Exiting);
        assert_eq!(set.mounted().collect::<Vec<_>>(), vec![0]);

        assert_eq!(set.complete(exit), Some(Phase::Closed));
        assert_eq!(set.phase(0), Phase::Closed);
        assert_eq!(set.mounted().count(), 0);
    }

    #[test]
    fn test_stale_exit_ticket_is_ignored() {
        let mut set = TransitionSet::new();
        set.enter(0);
        let stale_exit = set.exit(0).unwrap();
        let reenter = set.enter(0).unwrap();

        assert_eq!(set.complete(stale_exit), None);
        assert_eq!(set.phase(0), Phase::Entering);
        assert_eq!(set.complete(reenter), Some(Phase::Open));
    }

    #[test]
    fn test_exit_of_closed_item_is_noop() {
        let mut set = TransitionSet::new();
        assert!(set.exit(3).is_none());
        assert_eq!(set.phase(3), Phase::Closed);
    }

    #[test]
    fn test_animated_toggle_open_and_close() {
        let mut state = AnimatedState::new(TransitionConfig::default());

        let scheduled = state.toggle(0);
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].delay_ms, 300);
        assert_eq!(state.phase(0), Phase::Entering);
        state.complete(scheduled[0].ticket);
        assert_eq!(state.phase(0), Phase::Open);

        let scheduled = state.toggle(0);
        assert_eq!(state.open_index(), None);
        // Sampled right after the close click the content is still there
        assert!(state.is_mounted(0));
        assert_eq!(state.phase(0), Phase::Exiting);

        state.complete(scheduled[0].ticket);
        assert!(!state.is_mounted(0));
    }

    #[test]
    fn test_animated_switch_exits_previous_and_enters_next() {
        let mut state = AnimatedState::new(TransitionConfig { enter_ms: 100, exit_ms: 250 });
        state.toggle(0);

        let scheduled = state.toggle(1);
        assert_eq!(scheduled.len(), 2);
        assert!(state.is_open(1));
        assert!(!state.is_open(0));
        assert_eq!(state.phase(0), Phase::Exiting);
        assert_eq!(state.phase(1), Phase::Entering);

        let exit = scheduled.iter().find(|s| s.ticket.index == 0).unwrap();
        assert_eq!(exit.delay_ms, 250);
        let enter = scheduled.iter().find(|s| s.ticket.index == 1).unwrap();
        assert_eq!(enter.delay_ms, 100);
    }

    #[test]
    fn test_animated_rapid_toggle_last_wins() {
        let mut state = AnimatedState::new(TransitionConfig::default());
        let opened = state.toggle(0);
        let closed = state.toggle(0);
        let reopened = state.toggle(0);

        // Timers armed by the first two clicks fire late and change nothing
        assert_eq!(state.complete(ticket_for(&opened, 0)), None);
        assert_eq!(state.complete(ticket_for(&closed, 0)), None);
        assert_eq!(state.phase(0), Phase::Entering);

        assert_eq!(state.complete(ticket_for(&reopened, 0)), Some(Phase::Open));
        assert!(state.is_open(0));
    }
}
