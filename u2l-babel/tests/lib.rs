// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod common;

#[cfg(test)]
mod latex2unicode;

#[cfg(test)]
mod tables;

#[cfg(test)]
mod unicode2latex;
