//! Unicode → LaTeX tests

mod accents;
mod concurrency;
mod decompositions;
mod properties;
