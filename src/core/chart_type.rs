use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkbenchError;

/// Chart kinds a panel can construct.
///
/// Names match the plotly-express constructor each kind reproduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Violin,
    Timeline,
    Pie,
    DensityHeatmap,
    ScatterMatrix,
    Strip,
    Histogram,
    DensityContour,
    Box,
    Scatter,
    ScatterTernary,
    ParallelCoordinates,
    Scatter3d,
    Line3d,
}

impl ChartType {
    pub const ALL: [Self; 17] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Violin,
        Self::Timeline,
        Self::Pie,
        Self::DensityHeatmap,
        Self::ScatterMatrix,
        Self::Strip,
        Self::Histogram,
        Self::DensityContour,
        Self::Box,
        Self::Scatter,
        Self::ScatterTernary,
        Self::ParallelCoordinates,
        Self::Scatter3d,
        Self::Line3d,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Violin => "violin",
            Self::Timeline => "timeline",
            Self::Pie => "pie",
            Self::DensityHeatmap => "density_heatmap",
            Self::ScatterMatrix => "scatter_matrix",
            Self::Strip => "strip",
            Self::Histogram => "histogram",
            Self::DensityContour => "density_contour",
            Self::Box => "box",
            Self::Scatter => "scatter",
            Self::ScatterTernary => "scatter_ternary",
            Self::ParallelCoordinates => "parallel_coordinates",
            Self::Scatter3d => "scatter_3d",
            Self::Line3d => "line_3d",
        }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.as_str() == s)
            .ok_or_else(|| WorkbenchError::UnknownChartType(s.to_owned()))
    }
}

/// Compact set of chart types, one bit per `ChartType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChartTypeSet(u32);

impl ChartTypeSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn all() -> Self {
        Self((1 << ChartType::ALL.len()) - 1)
    }

    #[must_use]
    pub fn from_slice(chart_types: &[ChartType]) -> Self {
        chart_types
            .iter()
            .fold(Self::EMPTY, |set, chart_type| set.with(*chart_type))
    }

    #[must_use]
    pub const fn with(self, chart_type: ChartType) -> Self {
        Self(self.0 | (1 << chart_type.index()))
    }

    pub fn insert(&mut self, chart_type: ChartType) {
        *self = self.with(chart_type);
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, chart_type: ChartType) -> bool {
        self.0 & (1 << chart_type.index()) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = ChartType> {
        ChartType::ALL
            .into_iter()
            .filter(move |chart_type| self.contains(*chart_type))
    }
}

impl FromIterator<ChartType> for ChartTypeSet {
    fn from_iter<I: IntoIterator<Item = ChartType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, chart_type| set.with(chart_type))
    }
}
