use serde::{Deserialize, Serialize};

/// Default duration of both the enter and the exit transition.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Timing of the animated accordion's content transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub enter_ms: u32,
    pub exit_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter_ms: DEFAULT_TRANSITION_MS,
            exit_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl TransitionConfig {
    pub fn uniform(ms: u32) -> Self {
        Self {
            enter_ms: ms,
            exit_ms: ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_config_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.enter_ms, 300);
        assert_eq!(config.exit_ms, 300);
    }

    #[test]
    fn test_transition_config_partial_json() {
        let config: TransitionConfig = serde_json::from_str(r#"{ "exit_ms": 500 }"#).unwrap();
        assert_eq!(config.enter_ms, 300);
        assert_eq!(config.exit_ms, 500);
    }

    #[test]
    fn test_transition_config_uniform() {
        assert_eq!(TransitionConfig::uniform(120), TransitionConfig { enter_ms: 120, exit_ms: 120 });
    }
}
