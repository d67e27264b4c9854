//! Framework-free building blocks of the accordion showcase: item types,
//! the open/closed state machines of each accordion variant and the
//! transition bookkeeping of the animated variant.

pub mod config;
pub mod error;
pub mod state;
pub mod transition;
pub mod types;

pub use config::{TransitionConfig, DEFAULT_TRANSITION_MS};
pub use error::CatalogError;
pub use state::{ExclusiveState, MultiState, NestedState};
pub use transition::{AnimatedState, Phase, Scheduled, TransitionSet, TransitionTicket};
pub use types::{Item, SampleCatalog, Section};
