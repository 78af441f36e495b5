use super::{Block, Dispenser};

/// Carves whole blocks out of `dispenser`.
///
/// The number of blocks is set by the scarcest denomination relative to its
/// definition requirement (`count / definition[j]`, first minimum wins). Each
/// block takes `definition[j]` units of every `values[j]`. Returns the blocks
/// together with the left-over dispenser.
///
/// `values` and `definition` must line up index by index.
pub fn whole_blocks(
    dispenser: &Dispenser,
    values: &[u64],
    definition: &[usize],
) -> (Vec<Block>, Dispenser) {
    let mut left_over = dispenser.clone();

    let block_count = values
        .iter()
        .zip(definition)
        .map(|(&value, &required)| dispenser.count_of(value) / required)
        .min()
        .unwrap_or(0);

    let blocks = (0..block_count)
        .map(|_| fill_block(&mut left_over, values, definition))
        .collect();

    (blocks, left_over)
}

/// Carves partial blocks out of what is left after [`whole_blocks`].
///
/// As many rounds are run as the most plentiful remaining denomination has
/// units; each round fills a block the same best-effort way as a whole block.
/// Empty blocks are dropped.
pub fn partial_blocks(
    left_over: &Dispenser,
    values: &[u64],
    definition: &[usize],
) -> (Vec<Block>, Dispenser) {
    let mut remaining = left_over.clone();

    let rounds = values
        .iter()
        .map(|&value| left_over.count_of(value))
        .max()
        .unwrap_or(0);

    let blocks = (0..rounds)
        .map(|_| fill_block(&mut remaining, values, definition))
        .filter(|block| !block.is_empty())
        .collect();

    (blocks, remaining)
}

/// Takes up to `definition[j]` units of each `values[j]`; short denominations
/// are simply under-filled.
fn fill_block(dispenser: &mut Dispenser, values: &[u64], definition: &[usize]) -> Block {
    // Requirements grow with the gaps between denominations; units do not.
    let wanted = definition.iter().fold(0usize, |sum, &required| sum.saturating_add(required));
    let mut block = Block::with_capacity(wanted.min(dispenser.len()));
    for (&value, &required) in values.iter().zip(definition) {
        for _ in 0..required {
            match dispenser.take(value) {
                Some(unit) => block.push(unit),
                None => break,
            }
        }
    }
    block
}
