//! LaTeX → Unicode tests

mod reverse;
