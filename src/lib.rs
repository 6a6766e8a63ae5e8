mod config;
mod join;
mod mirror;
mod options;
mod preset;

pub use config::{Conjunction, JoinConfig, Quoting};
pub use join::{join, join_preset, join_with};
pub use mirror::{mirror, mirror_char};
pub use options::JoinOptions;
pub use preset::{Preset, UnknownPresetError};
