use super::ValueCountMap;

/// Flattened inventory: one entry per available unit, in ascending order.
///
/// Blocks are carved out of a dispenser by taking units one at a time; whatever
/// is not taken is the left-over handed to the next stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispenser {
    units: Vec<u64>,
}

impl Dispenser {
    /// Expands `count` copies of every denomination of the inventory.
    pub fn from_inventory(inventory: &ValueCountMap) -> Self {
        let units = inventory
            .iter()
            .flat_map(|(&value, &count)| std::iter::repeat(value).take(count))
            .collect();
        Dispenser { units }
    }

    /// Removes the first unit equal to `value`, if one is left.
    pub fn take(&mut self, value: u64) -> Option<u64> {
        let pos = self.units.iter().position(|&unit| unit == value)?;
        Some(self.units.remove(pos))
    }

    /// Number of units of `value` still available.
    pub fn count_of(&self, value: u64) -> usize {
        self.units.iter().filter(|&&unit| unit == value).count()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.units
    }
}
