pub mod subset;

pub use subset::{Block, Definition, SearchConfig, Solution, Strategy, SubsetSolver, ValueCountMap};
