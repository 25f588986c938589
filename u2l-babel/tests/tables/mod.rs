//! Table building from definition files on disk

mod definitions;
