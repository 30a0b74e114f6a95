//! Composite scoring by strict domain intersection.

use ronda_traits::{CrossSection, Result, RondaError};

/// Sum a list of normalized cross-sections into one composite score.
///
/// An asset's composite value is the sum of its values across all inputs. An
/// asset missing from *any* input's domain is excluded from the composite
/// entirely — strict intersection, never sum-with-zero-fill — so a composite
/// value always reflects the full signal list.
///
/// # Errors
///
/// Returns [`RondaError::Configuration`] for an empty input list: a composite
/// with no signals is a strategy definition mistake, not an empty day.
pub fn combine(inputs: &[CrossSection]) -> Result<CrossSection> {
    let Some((first, rest)) = inputs.split_first() else {
        return Err(RondaError::Configuration(
            "cannot combine an empty signal list".to_string(),
        ));
    };

    let mut composite = first.clone();
    for input in rest {
        composite = composite
            .iter()
            .filter_map(|(symbol, value)| input.get(symbol).map(|v| (symbol.clone(), value + v)))
            .collect();
    }
    Ok(composite)
}
