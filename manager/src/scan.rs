//! The single left-to-right scan over the token stream.

use argmatch_core::{Claim, MissingValueError};
use tracing::{debug, trace};

use crate::parameter::Parameter;

/// Tokens that no matcher claimed, with their positions.
#[derive(Debug, Default)]
pub(crate) struct ScanReport {
    pub unclaimed: Vec<(usize, String)>,
}

/// Offers each token to the parameters in registration order.
///
/// The first parameter whose matcher claims the token wins; a claimed span
/// skips the cursor past the extra tokens. Unclaimed tokens are dropped and
/// recorded in the report.
pub(crate) fn scan(
    tokens: &[String],
    parameters: &mut [Parameter],
) -> Result<ScanReport, MissingValueError> {
    let mut report = ScanReport::default();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let mut claim = Claim::NotClaimed;
        for parameter in parameters.iter_mut() {
            claim = parameter.matcher.offer(tokens, cursor)?;
            if claim.is_claimed() {
                trace!(
                    destination = %parameter.destination,
                    cursor,
                    width = claim.width(),
                    "Token claimed"
                );
                break;
            }
        }

        if !claim.is_claimed() {
            debug!(cursor, token = %tokens[cursor], "No parameter claimed token; dropping it");
            report.unclaimed.push((cursor, tokens[cursor].clone()));
        }
        cursor += claim.width();
    }

    Ok(report)
}
