//! Subset block solver.
//!
//! Given an inventory of denominations (coin sizes, tool sizes, ...) with the
//! number of units available of each, the solver answers "which units add up
//! to exactly this target?".
//!
//! On construction the inventory is analysed once:
//! - a *definition* states how many of each denomination are needed to bridge
//!   up to the next larger one,
//! - the flattened inventory (the *dispenser*) is cut into *whole blocks*, each
//!   a full instance of the definition, and *partial blocks* made from what
//!   is left over.
//!
//! Two query strategies read that immutable state:
//! - [`SubsetSolver::least_number_solve`]: greedy, largest denomination first,
//!   aiming for the fewest pieces,
//! - [`SubsetSolver::anilao_solve`]: exhaustive search inside a single block,
//!   aiming for the most pieces.
//!
//! # Examples
//!
//! ```
//! use subset_blocks::cs::combinatorial::subset::{SubsetSolver, ValueCountMap};
//!
//! let inventory: ValueCountMap = [(1, 4), (5, 1), (10, 1)].into_iter().collect();
//! let solver = SubsetSolver::new(inventory).unwrap();
//!
//! assert_eq!(solver.range(), (1, 20));
//! assert_eq!(solver.anilao_solve(16), vec![1, 5, 10]);
//! assert_eq!(solver.least_number_solve(16), vec![1, 5, 10]);
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{Error, Result};

mod blocks;
mod definition;
mod dispenser;
mod greedy;
mod search;

pub use blocks::{partial_blocks, whole_blocks};
pub use definition::calculate_definition;
pub use dispenser::Dispenser;
pub use search::{largest_subset, matching_subsets, SearchConfig};

/// Denomination to number of available units.
pub type ValueCountMap = BTreeMap<u64, usize>;

/// Per-denomination unit requirement, ascending by denomination.
pub type Definition = Vec<usize>;

/// A concrete group of units carved out of the inventory.
pub type Block = Vec<u64>;

/// Units whose sum is the requested target. Empty means "no solution".
pub type Solution = Vec<u64>;

/// Query strategy for [`SubsetSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Greedy, fewest pieces.
    LeastNumber,
    /// Exhaustive block search, most pieces.
    Anilao,
}

/// Solver over a fixed inventory.
///
/// All derived state is computed in [`SubsetSolver::new`] and never changes;
/// a different inventory needs a new solver.
#[derive(Debug, Clone)]
pub struct SubsetSolver {
    inventory: ValueCountMap,
    values: Vec<u64>,
    definition: Definition,
    range_low: u64,
    range_high: u64,
    whole_blocks: Vec<Block>,
    partial_blocks: Vec<Block>,
    config: SearchConfig,
}

impl SubsetSolver {
    /// Builds a solver with the default [`SearchConfig`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInventory`] when no denomination has a positive count,
    /// when a denomination is 0, or when the gaps between denominations
    /// overflow the representable range.
    pub fn new(inventory: ValueCountMap) -> Result<Self> {
        Self::with_config(inventory, SearchConfig::default())
    }

    /// Builds a solver with an explicit search configuration.
    pub fn with_config(mut inventory: ValueCountMap, config: SearchConfig) -> Result<Self> {
        inventory.retain(|_, count| *count > 0);

        if inventory.is_empty() {
            return Err(Error::invalid_inventory(
                "inventory has no denomination with a positive count",
            ));
        }
        if inventory.contains_key(&0) {
            return Err(Error::invalid_inventory("denominations must be positive"));
        }

        let values: Vec<u64> = inventory.keys().copied().collect();
        let dispenser = Dispenser::from_inventory(&inventory);

        let (definition, range_low, range_high) = calculate_definition(&values)?;
        let (whole_blocks, left_over) = whole_blocks(&dispenser, &values, &definition);
        let (partial_blocks, _) = partial_blocks(&left_over, &values, &definition);

        debug!(
            "subset solver: definition {:?}, range [{}, {}], {} whole and {} partial blocks",
            definition,
            range_low,
            range_high,
            whole_blocks.len(),
            partial_blocks.len()
        );

        Ok(SubsetSolver {
            inventory,
            values,
            definition,
            range_low,
            range_high,
            whole_blocks,
            partial_blocks,
            config,
        })
    }

    /// `(low, high)`: the smallest denomination and the sum of one full
    /// definition's worth of units.
    pub fn range(&self) -> (u64, u64) {
        (self.range_low, self.range_high)
    }

    pub fn block_definition(&self) -> &[usize] {
        &self.definition
    }

    pub fn whole_blocks(&self) -> &[Block] {
        &self.whole_blocks
    }

    pub fn partial_blocks(&self) -> &[Block] {
        &self.partial_blocks
    }

    /// The inventory with zero-count entries removed.
    pub fn inventory(&self) -> &ValueCountMap {
        &self.inventory
    }

    /// Unique denominations, ascending.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Greedy solve aiming for the fewest pieces. Empty when greedy descent
    /// does not reach `target` exactly (or when `target` is 0).
    pub fn least_number_solve(&self, target: u64) -> Solution {
        self.try_least_number_solve(target).unwrap_or_default()
    }

    /// Like [`least_number_solve`](Self::least_number_solve) but tells "no
    /// solution" (`None`) apart from the empty solution of target 0.
    pub fn try_least_number_solve(&self, target: u64) -> Option<Solution> {
        greedy::least_number(&self.inventory, target)
    }

    /// Exhaustive block search aiming for the most pieces. Empty when no
    /// searched block has a matching subset (or when `target` is 0).
    pub fn anilao_solve(&self, target: u64) -> Solution {
        self.try_anilao_solve(target).unwrap_or_default()
    }

    /// Like [`anilao_solve`](Self::anilao_solve) but tells "no solution"
    /// (`None`) apart from the empty solution of target 0.
    ///
    /// Partial blocks are searched in order and the first one with any match
    /// wins. Only if none matches is the first whole block searched; further
    /// whole blocks are never tried.
    pub fn try_anilao_solve(&self, target: u64) -> Option<Solution> {
        for (i, block) in self.partial_blocks.iter().enumerate() {
            let found = matching_subsets(block, target, &self.config);
            if !found.is_empty() {
                trace!("target {} matched in partial block {}", target, i);
                return largest_subset(&found).cloned();
            }
        }

        let block = self.whole_blocks.first()?;
        let found = matching_subsets(block, target, &self.config);
        if !found.is_empty() {
            trace!("target {} matched in whole block 0", target);
        }
        largest_subset(&found).cloned()
    }

    pub fn solve(&self, target: u64, strategy: Strategy) -> Solution {
        match strategy {
            Strategy::LeastNumber => self.least_number_solve(target),
            Strategy::Anilao => self.anilao_solve(target),
        }
    }
}
