//! Configuration for the polygon engine.

#[derive(Debug, Clone)]
pub struct Config {
    // Evaluation constants
    pub mobility_weight: i32,
    pub merge_pair_bonus: i32,

    // Search constants
    pub search_depth: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobility_weight: 10,
            merge_pair_bonus: 50,
            search_depth: 3,
        }
    }
}
