//! Random text generation from a trained word-transition model.

pub mod markov;

pub use markov::{GeneratorConfig, ListOfListsGenerator, MarkovTextGenerator};
