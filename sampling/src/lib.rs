//! Seedable pseudorandom sources shared by the engines and the test suites.

pub mod source;

pub use source::Source;
