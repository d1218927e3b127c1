//! Agent process launcher

mod runner;

pub use runner::AgentRunner;
