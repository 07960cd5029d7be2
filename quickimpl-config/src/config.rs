use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ReceiverNameMode, ReceiverType};

pub const DEFAULT_PLACEHOLDER: &str = "Please enter interface which you want to implement.";

/// Root of `quickimpl.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Receiver settings, stored as top-level keys
    #[serde(flatten)]
    pub generation: GenerationConfig,

    /// External stub generator
    pub generator: GeneratorConfig,

    /// External workspace symbol index
    pub index: IndexConfig,

    /// Interactive interface picker
    pub prompt: PromptConfig,
}

/// Settings that shape the composed generator command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub receiver_name_mode: ReceiverNameMode,
    /// Characters of the struct name used in derived mode
    pub receiver_name_length: usize,
    pub fixed_receiver_name: String,
    pub receiver_type: ReceiverType,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            receiver_name_mode: ReceiverNameMode::Derived,
            receiver_name_length: 1,
            fixed_receiver_name: String::new(),
            receiver_type: ReceiverType::Pointer,
        }
    }
}

impl GenerationConfig {
    pub fn receiver_is_pointer(&self) -> bool {
        self.receiver_type.is_pointer()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Program invoked to produce stubs
    pub tool: String,
    /// Arguments placed before the receiver and interface, e.g.
    /// `["run", "github.com/josharian/impl@latest"]` with `tool = "go"`
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tool: "impl".to_string(),
            args: Vec::new(),
            timeout_secs: 10,
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Program answering workspace symbol queries
    pub tool: String,
    pub timeout_secs: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tool: "gopls".to_string(),
            timeout_secs: 10,
        }
    }
}

impl IndexConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptConfig {
    /// Quiet period after the last keystroke before querying
    pub debounce_ms: u64,
    pub placeholder: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PromptConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
