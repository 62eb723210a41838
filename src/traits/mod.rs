//! Collaborator seams implemented by the host.
//!
//! The schema layer stays deliberately thin: matching, shaping, argument
//! interpretation, naming, and settings all live behind these traits.
//! Everything is dyn-capable and `Send + Sync`, shared into resolvers as
//! `Arc<dyn ...>`.

mod engine;
mod naming;
mod settings;
mod shaping;
mod transform;

pub use engine::{MatchEngine, MatchQuery};
pub use naming::{ArgBuildOptions, DefaultNaming, NamingStrategy};
pub use settings::{SettingsStore, StaticSettings};
pub use shaping::ResponseShaper;
pub use transform::{ArgTransformer, TransformOptions};
