//! Parameter types for the few endpoints whose arguments are worth typing.

use serde::{Deserialize, Serialize};

/// Time frame of RRD statistics.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RrdTimeframe {
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
}
serde_plain::derive_display_from_serialize!(RrdTimeframe);
serde_plain::derive_fromstr_from_deserialize!(RrdTimeframe);

/// RRD consolidation function.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RrdConsolidation {
    Average,
    Max,
}
serde_plain::derive_display_from_serialize!(RrdConsolidation);
serde_plain::derive_fromstr_from_deserialize!(RrdConsolidation);

/// Parameters of the `rrd` and `rrddata` calls.
#[derive(Clone, Debug, Serialize)]
pub struct RrdParams {
    /// Comma separated list of data sources, only used by `rrd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds: Option<String>,

    pub timeframe: RrdTimeframe,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf: Option<RrdConsolidation>,
}

impl RrdParams {
    pub fn new(timeframe: RrdTimeframe) -> Self {
        Self {
            ds: None,
            timeframe,
            cf: None,
        }
    }

    /// Select data sources, e.g. `["cpu", "mem"]`.
    pub fn ds<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item: AsRef<str>>,
    {
        let sources: Vec<String> = sources
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.ds = Some(sources.join(","));
        self
    }

    pub fn cf(mut self, cf: RrdConsolidation) -> Self {
        self.cf = Some(cf);
        self
    }
}

/// Kind of entries listed by `/cluster/resources`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterResourceKind {
    Vm,
    Storage,
    Node,
    Sdn,
}
serde_plain::derive_display_from_serialize!(ClusterResourceKind);
serde_plain::derive_fromstr_from_deserialize!(ClusterResourceKind);

/// Parameters of `/cluster/resources`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClusterResources {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<ClusterResourceKind>,
}
