//! Fixed marker tables used when rendering daemon results

/// Marker for any deployment state missing from the table
pub const DEFAULT_STATE_MARKER: &str = "⚪";

/// Marker for any log level missing from the table
pub const DEFAULT_LEVEL_MARKER: &str = "•";

const DEPLOYMENT_STATE_MARKERS: &[(&str, &str)] = &[
    ("READY", "🟢"),
    ("ERROR", "🔴"),
    ("BUILDING", "🟡"),
    ("QUEUED", "⚪"),
];

const LOG_LEVEL_MARKERS: &[(&str, &str)] = &[("error", "❌"), ("warn", "⚠️"), ("info", "ℹ️")];

/// Marker for a deployment in a listing
pub fn deployment_marker(state: &str) -> &'static str {
    lookup(DEPLOYMENT_STATE_MARKERS, state).unwrap_or(DEFAULT_STATE_MARKER)
}

/// Marker for the single-deployment status view, where every state that is
/// neither ready nor failed counts as in progress.
pub fn status_marker(state: &str) -> &'static str {
    match state {
        "READY" => "🟢",
        "ERROR" => "🔴",
        _ => "🟡",
    }
}

pub fn log_marker(level: &str) -> &'static str {
    lookup(LOG_LEVEL_MARKERS, level).unwrap_or(DEFAULT_LEVEL_MARKER)
}

pub fn verified_marker(verified: bool) -> &'static str {
    if verified {
        "✓"
    } else {
        "✗"
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, marker)| *marker)
}
