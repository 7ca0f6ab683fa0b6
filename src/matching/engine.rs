//! Two-phase filter-and-score selection.

use crate::attributes::Attributes;
use crate::policy::{AttributeMatcher, MatchPolicy};

use super::error::MatchError;
use super::types::Candidate;

/// A requested attribute resolved against the policy: its name, the value
/// the consumer asked for, and the matcher that scores candidates on it.
struct AttributeCheck<'c> {
    name: &'c str,
    requested_value: &'c str,
    matcher: &'c dyn AttributeMatcher,
}

/// Per-candidate working state for one call. Holds an index into the
/// candidate slice rather than borrowing the candidate, so the working set
/// can be filtered freely; dropped at return.
struct MatchDetails {
    index: usize,
    score: i64,
}

/// Selects the candidates that best satisfy `requested` under `policy`.
///
/// Returns the identities of the winning candidates, in the order the
/// candidates were supplied:
///
/// - `[]` — no candidate satisfies the required attributes
/// - `[x]` — unique winner
/// - `[x, y, ..]` — unresolved ambiguity among equally good candidates;
///   never an arbitrarily broken tie
///
/// Required attributes are applied first; if they already produce a unique
/// winner (by survival or by strict minimum aggregate score), optional
/// attributes are not consulted at all. Otherwise the optional attributes
/// are applied to *all* survivors — not just the tied ones — with the
/// aggregate scores carried over, and resolution is re-attempted.
///
/// A candidate missing an optional attribute is eliminated during the
/// optional phase just as a required attribute would eliminate it; see
/// [`AttributeMatcher::is_required`] for what "optional" actually controls.
///
/// # Errors
///
/// [`MatchError::UnconfiguredAttribute`] if the policy has no matcher for
/// one of the requested attribute names.
///
/// # Examples
///
/// ```
/// use attrmatch::attributes::Attributes;
/// use attrmatch::matching::{find_best_matches, Candidate};
/// use attrmatch::policy::MatcherRegistry;
///
/// let policy = MatcherRegistry::new().with_exact("os");
/// let requested = Attributes::from([("os", "linux")]);
/// let candidates = vec![
///     Candidate::new("debug", Attributes::from([("os", "linux")])),
///     Candidate::new("release", Attributes::from([("os", "windows")])),
/// ];
///
/// let winners = find_best_matches(&policy, &requested, &candidates).unwrap();
/// assert_eq!(winners, vec![&"debug"]);
/// ```
pub fn find_best_matches<'a, T, P: MatchPolicy + ?Sized>(
    policy: &P,
    requested: &Attributes,
    candidates: &'a [Candidate<T>],
) -> Result<Vec<&'a T>, MatchError> {
    let mut required = Vec::with_capacity(requested.len());
    let mut optional = Vec::with_capacity(requested.len());
    for (name, requested_value) in requested.iter() {
        let matcher =
            policy
                .attribute_matcher(name)
                .ok_or_else(|| MatchError::UnconfiguredAttribute {
                    name: name.to_string(),
                })?;
        let check = AttributeCheck {
            name,
            requested_value,
            matcher,
        };
        if matcher.is_required() {
            required.push(check);
        } else {
            optional.push(check);
        }
    }

    let mut working: Vec<MatchDetails> = (0..candidates.len())
        .map(|index| MatchDetails { index, score: 0 })
        .collect();

    filter_candidates(candidates, &mut working, &required);
    if let Some(winners) = resolve(candidates, &working) {
        return Ok(winners);
    }

    // Survivors match all required attributes but tie on aggregate score.
    // The whole surviving set proceeds, scores intact.
    filter_candidates(candidates, &mut working, &optional);
    if let Some(winners) = resolve(candidates, &working) {
        return Ok(winners);
    }

    // Terminal tie: report every equally good candidate, in input order.
    Ok(working.iter().map(|d| &candidates[d.index].id).collect())
}

/// Applies one attribute family to the working set, in order.
///
/// A candidate lacking the attribute, or scoring negative on it, is
/// eliminated; non-negative scores accumulate into the running aggregate.
fn filter_candidates<T>(
    candidates: &[Candidate<T>],
    working: &mut Vec<MatchDetails>,
    checks: &[AttributeCheck<'_>],
) {
    for check in checks {
        working.retain_mut(|details| {
            let Some(value) = candidates[details.index].attributes.get(check.name) else {
                return false;
            };
            let cmp = check.matcher.score(check.requested_value, value);
            if cmp < 0 {
                return false;
            }
            details.score += i64::from(cmp);
            true
        });
    }
}

/// Attempts to end the call: empty and singleton working sets are final, as
/// is a strict minimum aggregate score. A tie at the minimum returns `None`
/// so the caller can keep filtering.
fn resolve<'a, T>(
    candidates: &'a [Candidate<T>],
    working: &[MatchDetails],
) -> Option<Vec<&'a T>> {
    if working.len() <= 1 {
        return Some(working.iter().map(|d| &candidates[d.index].id).collect());
    }

    let mut best: &MatchDetails = &working[0];
    let mut best_count = 1;
    for details in &working[1..] {
        if details.score < best.score {
            best = details;
            best_count = 1;
        } else if details.score == best.score {
            best_count += 1;
        }
    }

    if best_count == 1 {
        Some(vec![&candidates[best.index].id])
    } else {
        None
    }
}
