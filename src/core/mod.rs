//! Platform-independent state: navigation state machine, particle simulation,
//! section model, section shortcut controls and the shared debounce primitive.
pub mod actions;
pub mod constants;
pub mod debounce;
pub mod navigation;
pub mod particles;
pub mod sections;

pub use actions::{FabAction, FabEmphasis, FabMenu};
pub use debounce::{Debouncer, Timers};
pub use navigation::{ModeChange, NavMode, NavState, NavThresholds};
pub use particles::{ParticleField, TimeStep};
pub use sections::{Section, SectionExtent};
