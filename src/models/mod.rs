// Models module for data structures
pub mod day;
pub mod scaffold;
