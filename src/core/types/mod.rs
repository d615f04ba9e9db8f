//! Value types shared across the crate.

mod pose;

pub use pose::{Point2D, Pose2D};
