use num_integer::Integer;

use super::Definition;
use crate::error::{Error, Result};

/// Computes the block definition and the representable range for a set of
/// unique denominations.
///
/// `values` must be positive, sorted ascending and free of duplicates. Entry `i` of the
/// returned definition says how many of `values[i]` are needed to bridge up to
/// `values[i + 1]`, counting what the smaller denominations already cover. The
/// last entry is always 1.
///
/// Returns `(definition, low, high)` where `low` is the smallest denomination
/// and `high` the sum of one full definition's worth of denominations.
///
/// # Errors
///
/// [`Error::InvalidInventory`] when the gaps between denominations are so wide
/// that the range or a requirement no longer fits the integer types.
///
/// # Examples
///
/// ```
/// use subset_blocks::cs::combinatorial::subset::calculate_definition;
///
/// // Five 1s reach 5, one 5 reaches 10.
/// let (definition, low, high) = calculate_definition(&[1, 5, 10]).unwrap();
/// assert_eq!(definition, vec![5, 1, 1]);
/// assert_eq!((low, high), (1, 20));
/// ```
pub fn calculate_definition(values: &[u64]) -> Result<(Definition, u64, u64)> {
    let mut definition = Definition::with_capacity(values.len());
    let low = values.first().copied().unwrap_or(0);
    let mut high = low;
    let mut running_count: u64 = 0;

    for (i, &value) in values.iter().enumerate() {
        let Some(&next) = values.get(i + 1) else {
            definition.push(1);
            high = value.checked_add(running_count).ok_or_else(range_overflow)?;
            break;
        };

        // A running count already past the next tier counts as a zero gap.
        let gap = next.saturating_sub(running_count);
        let (quotient, remainder) = gap.div_rem(&value);

        let required = if quotient == 0 {
            1
        } else if remainder > 0 {
            quotient + 1
        } else {
            quotient
        };

        running_count = required
            .checked_mul(value)
            .and_then(|bridged| running_count.checked_add(bridged))
            .ok_or_else(range_overflow)?;
        definition.push(usize::try_from(required).map_err(|_| range_overflow())?);
    }

    Ok((definition, low, high))
}

fn range_overflow() -> Error {
    Error::invalid_inventory("denomination gaps overflow the representable range")
}
