//! Classification engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable thresholds for the classification engine.
///
/// Every field is optional; `effective_*` accessors fall back to the
/// defaults in `constants`. Loaded from TOML when a config file exists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Smallest family the clusterer emits. Default: 3.
    pub min_family_size: Option<usize>,
    /// Depth bound for flat-name prefix expansion. Default: 6.
    pub max_cluster_depth: Option<usize>,
    /// Minimum informative prefix length. Default: 2.
    pub min_prefix_len: Option<u32>,
    /// Minimum adjacent-probability gap for a confident prediction.
    /// Default: 0.20.
    pub min_confidence_gap: Option<f64>,
    /// Depth above which the walker treats segments as organizational
    /// namespaces and never queries the catalog. Default: 2.
    pub skip_depth: Option<u32>,
    /// Web-evidence endpoint; unset means the online path is disabled.
    pub evidence_endpoint: Option<String>,
    /// Per-lookup evidence timeout in seconds. Default: 10.
    pub evidence_timeout_secs: Option<u64>,
}

impl ClassifyConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn effective_min_family_size(&self) -> usize {
        self.min_family_size.unwrap_or(constants::MIN_FAMILY_SIZE)
    }

    pub fn effective_max_cluster_depth(&self) -> usize {
        self.max_cluster_depth
            .unwrap_or(constants::MAX_CLUSTER_DEPTH)
    }

    pub fn effective_min_prefix_len(&self) -> u32 {
        self.min_prefix_len.unwrap_or(constants::MIN_PREFIX_LEN)
    }

    pub fn effective_min_confidence_gap(&self) -> f64 {
        self.min_confidence_gap
            .unwrap_or(constants::MIN_CONFIDENCE_GAP)
    }

    pub fn effective_skip_depth(&self) -> u32 {
        self.skip_depth.unwrap_or(constants::ORG_NAMESPACE_DEPTH)
    }

    pub fn effective_evidence_timeout_secs(&self) -> u64 {
        self.evidence_timeout_secs
            .unwrap_or(constants::EVIDENCE_TIMEOUT_SECS)
    }
}
