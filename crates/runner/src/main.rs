//! Homestead - console demonstration of the house model
//!
//! This crate is the *composition root*: it assembles two houses and walks
//! them through the demonstration sequence.

mod composition;
mod run;

fn main() -> anyhow::Result<()> {
    run::run()
}
