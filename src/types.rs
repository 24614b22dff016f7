use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How the graph builder treats malformed input.
///
/// - `Lenient`: duplicate node IDs overwrite earlier ones (last write wins)
///   and edges may name IDs that are not in the node list (default).
/// - `Strict`: the first duplicate ID or dangling edge endpoint is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPolicy {
    Lenient,
    Strict,
}

impl Default for BuildPolicy {
    fn default() -> Self {
        BuildPolicy::Lenient
    }
}

impl FromStr for BuildPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(BuildPolicy::Lenient),
            "strict" => Ok(BuildPolicy::Strict),
            other => Err(format!(
                "invalid policy: {other} (expected \"lenient\" or \"strict\")"
            )),
        }
    }
}

impl fmt::Display for BuildPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildPolicy::Lenient => f.write_str("lenient"),
            BuildPolicy::Strict => f.write_str("strict"),
        }
    }
}
