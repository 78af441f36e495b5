use super::{Solution, ValueCountMap};

/// Single descending greedy pass: take as many of each denomination as fit
/// into what is still missing, never backtracking.
///
/// The solution lists denominations in ascending order. Returns `None` when
/// the pass does not land exactly on `target`, which can happen even though
/// some other combination of the inventory would.
pub(super) fn least_number(inventory: &ValueCountMap, target: u64) -> Option<Solution> {
    let mut running_total = target;
    let mut taken: Vec<(u64, usize)> = Vec::new();

    for (&value, &count) in inventory.iter().rev() {
        if running_total < value {
            continue;
        }

        let desired = running_total / value;
        let retrieved = desired.min(count as u64);
        let amount = retrieved * value;

        taken.push((value, retrieved as usize));
        if amount == running_total {
            break;
        }
        running_total -= amount;
    }

    let solution: Solution = taken
        .iter()
        .rev()
        .flat_map(|&(value, retrieved)| std::iter::repeat(value).take(retrieved))
        .collect();

    (solution.iter().sum::<u64>() == target).then_some(solution)
}
