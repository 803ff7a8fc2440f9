//! Option model shared between the host platform and world modules.
//!
//! `options-core` defines the registry types the host threads through the
//! world lifecycle hooks ([`WorldHooks`]) while a world definition is
//! loaded, plus the value-resolution APIs the host's generation pipeline
//! consumes afterwards. World crates depend on the types re-exported here.
pub mod error;
pub mod groups;
pub mod hooks;
pub mod registry;
pub mod spec;
pub mod value;

pub use error::OptionsError;
pub use groups::{GroupRegistry, OptionGroup};
pub use hooks::{WorldHooks, load_groups, load_options};
pub use registry::{FinalizedOptions, OptionRegistry};
pub use spec::{ChoiceData, NamedValue, OptionKind, OptionSpec, RangeData, TextData, ToggleData};
pub use value::{OptionValue, ResolvedOptions};
