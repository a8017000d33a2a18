mod tables;

pub use self::tables::{attribution, model_summary};
