pub mod collector;
pub mod directive;
pub mod expander;
pub mod options;
pub mod preprocessor;
