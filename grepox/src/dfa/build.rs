//! Subset construction: converts an [Nfa](crate::nfa::Nfa) into a [Dfa] by
//! exploring epsilon-closed sets of NFA states reachable by consuming
//! alphabet symbols, starting from the epsilon-closure of the NFA's start
//! state.

use super::{Dfa, DfaState};
use crate::nfa::Nfa;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Runs subset construction over `nfa`, producing an equivalent [Dfa].
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let start_set = nfa.epsilon_closure_of(nfa.start());

    let mut state_ids: BTreeMap<BTreeSet<usize>, usize> = BTreeMap::new();
    let mut states: Vec<DfaState> = Vec::new();
    let mut queue: VecDeque<BTreeSet<usize>> = VecDeque::new();

    let start_id = intern(&start_set, &mut state_ids, &mut states, nfa.accept());
    queue.push_back(start_set);

    while let Some(set) = queue.pop_front() {
        let from_id = state_ids[&set];
        for &symbol in nfa.alphabet() {
            let moved = nfa.step(&set, symbol);
            if moved.is_empty() {
                continue;
            }
            let closure = nfa.epsilon_closure(&moved);
            let is_new = !state_ids.contains_key(&closure);
            let to_id = intern(&closure, &mut state_ids, &mut states, nfa.accept());
            states[from_id].transitions.insert(symbol, to_id);
            if is_new {
                queue.push_back(closure);
            }
        }
    }

    Dfa {
        states,
        start: start_id,
    }
}

/// Looks up (or allocates) the DFA state id for a composite NFA-state set,
/// marking it accepting iff it contains the NFA's accept state.
fn intern(
    set: &BTreeSet<usize>,
    state_ids: &mut BTreeMap<BTreeSet<usize>, usize>,
    states: &mut Vec<DfaState>,
    nfa_accept: usize,
) -> usize {
    if let Some(&id) = state_ids.get(set) {
        return id;
    }
    let id = states.len();
    states.push(DfaState {
        transitions: BTreeMap::new(),
        accepting: set.contains(&nfa_accept),
    });
    state_ids.insert(set.clone(), id);
    id
}
