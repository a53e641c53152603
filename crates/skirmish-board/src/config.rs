//! Board configuration.

/// Which adjacent tiles a character may step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinal and diagonal steps.
    Eight,
}

/// Configuration for a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub connectivity: Connectivity,
}

impl BoardConfig {
    /// Eight-connected movement.
    pub fn diagonal() -> Self {
        Self {
            connectivity: Connectivity::Eight,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: BoardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BoardConfig::default());
        let cfg: BoardConfig = serde_json::from_str(r#"{"connectivity":"eight"}"#).unwrap();
        assert_eq!(cfg, BoardConfig::diagonal());
    }
}
