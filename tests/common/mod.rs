#![allow(dead_code)]

mod fixture;
pub use fixture::Fixture;

mod cross_runner;
pub use cross_runner::CrossRunnerBuilder;
