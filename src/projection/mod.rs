//! Forward projection of the green financing need

mod growth;

pub use growth::{Anchor, ProjectedPoint, project_compound_growth};
pub(crate) use growth::horizon_end_year;
