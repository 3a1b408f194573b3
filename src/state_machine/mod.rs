// Review-task lifecycle engine.
//
// Three states, three events, one pure transition table. Persistence of the
// resulting state belongs to the models layer; the composed operations there
// run load → validate → mutate inside a single transaction.

pub mod events;
pub mod states;
pub mod transitions;

pub use events::ReviewTaskEvent;
pub use states::ReviewTaskState;
pub use transitions::next_state;
