pub mod aggregate;
pub mod cli;
pub mod config;
pub mod input;
pub mod report;

pub mod prelude {
    pub use crate::aggregate::gene::{GeneAccumulator, GeneMean, aggregate_reader};
    pub use crate::config::ParseOptions;
}
