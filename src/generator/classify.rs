//! Failure classification heuristics.
//!
//! Upstream errors are classified by substring matching on their text. Every
//! such check lives here so the matching strategy can be replaced in one place.

/// Substrings marking an upstream error as throttling or quota exhaustion.
const RATE_LIMIT_MARKERS: [&str; 4] = ["429", "rate", "quota", "too many requests"];

/// Case-sensitive marker for a missing or rejected credential.
const CONFIGURATION_MARKER: &str = "API key";

/// How a failed generation maps onto the HTTP error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credential missing or rejected.
    Configuration,
    /// Upstream throttled the call or quota ran out.
    RateLimited,
    /// Anything else: network, malformed or empty responses.
    Upstream,
}

/// Whether an upstream error's text looks like throttling. Case-insensitive.
pub fn is_rate_limit_error(error_text: &str) -> bool {
    let lower = error_text.to_lowercase();
    RATE_LIMIT_MARKERS.iter().any(|m| lower.contains(m))
}

/// Classify a failure from its message and rate-limit flag.
///
/// The credential check wins over the rate-limit check when both could apply.
pub fn classify_failure(message: &str, rate_limited: bool) -> FailureKind {
    if message.contains(CONFIGURATION_MARKER) {
        FailureKind::Configuration
    } else if rate_limited {
        FailureKind::RateLimited
    } else {
        FailureKind::Upstream
    }
}
