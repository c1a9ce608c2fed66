use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which annotation of a matrix cell is used as the cost.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixMetric {
    #[default]
    Distance,
    Time,
}

impl Display for MatrixMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MatrixMetric::Distance => "distance",
                MatrixMetric::Time => "time",
            }
        )
    }
}

impl FromStr for MatrixMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(MatrixMetric::Distance),
            "time" => Ok(MatrixMetric::Time),
            other => Err(format!("unknown matrix metric: {other}")),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unexpected matrix shape: {0}")]
pub struct MatrixShapeError(pub String);

#[derive(Deserialize, Debug)]
struct VerboseCell {
    from_index: Option<usize>,
    to_index: Option<usize>,
    distance: Option<f64>,
    time: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum SourcesToTargets {
    Verbose(Vec<Vec<VerboseCell>>),
    Concise {
        #[serde(default)]
        durations: Option<Vec<Vec<Option<f64>>>>,
        #[serde(default)]
        distances: Option<Vec<Vec<Option<f64>>>>,
    },
}

/// Payload returned by Valhalla's `sources_to_targets` endpoint.
#[derive(Deserialize, Debug)]
pub struct MatrixResponse {
    sources_to_targets: SourcesToTargets,
}

/// Dense cost matrix stored as a flat vector.
/// `index = source * num_targets + target`. `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    costs: Vec<Option<f64>>,
    num_sources: usize,
    num_targets: usize,
}

impl CostMatrix {
    pub fn unreachable(num_sources: usize, num_targets: usize) -> Self {
        CostMatrix {
            costs: vec![None; num_sources * num_targets],
            num_sources,
            num_targets,
        }
    }

    pub fn from_rows(
        rows: Vec<Vec<Option<f64>>>,
        num_sources: usize,
        num_targets: usize,
    ) -> Result<Self, MatrixShapeError> {
        if rows.len() != num_sources {
            return Err(MatrixShapeError(format!(
                "expected {} rows, got {}",
                num_sources,
                rows.len()
            )));
        }

        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_targets)
        {
            return Err(MatrixShapeError(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                num_targets
            )));
        }

        Ok(CostMatrix {
            costs: rows.into_iter().flatten().collect(),
            num_sources,
            num_targets,
        })
    }

    #[inline(always)]
    fn index(&self, source: usize, target: usize) -> usize {
        source * self.num_targets + target
    }

    pub fn cost(&self, source: usize, target: usize) -> Option<f64> {
        if source >= self.num_sources || target >= self.num_targets {
            return None;
        }
        self.costs[self.index(source, target)]
    }

    pub fn num_sources(&self) -> usize {
        self.num_sources
    }

    pub fn num_targets(&self) -> usize {
        self.num_targets
    }
}

impl MatrixResponse {
    pub fn into_cost_matrix(
        self,
        metric: MatrixMetric,
        num_sources: usize,
        num_targets: usize,
    ) -> Result<CostMatrix, MatrixShapeError> {
        match self.sources_to_targets {
            SourcesToTargets::Verbose(rows) => {
                if rows.len() != num_sources {
                    return Err(MatrixShapeError(format!(
                        "expected {} rows, got {}",
                        num_sources,
                        rows.len()
                    )));
                }

                let mut matrix = CostMatrix::unreachable(num_sources, num_targets);
                let mut filled = vec![false; num_sources * num_targets];
                for (i, row) in rows.into_iter().enumerate() {
                    if row.len() != num_targets {
                        return Err(MatrixShapeError(format!(
                            "row {} has {} columns, expected {}",
                            i,
                            row.len(),
                            num_targets
                        )));
                    }

                    for (j, cell) in row.into_iter().enumerate() {
                        let source = cell.from_index.unwrap_or(i);
                        let target = cell.to_index.unwrap_or(j);
                        if source >= num_sources || target >= num_targets {
                            return Err(MatrixShapeError(format!(
                                "cell ({source}, {target}) is out of bounds"
                            )));
                        }

                        let index = matrix.index(source, target);
                        if filled[index] {
                            return Err(MatrixShapeError(format!(
                                "cell ({source}, {target}) given twice"
                            )));
                        }
                        filled[index] = true;
                        matrix.costs[index] = match metric {
                            MatrixMetric::Distance => cell.distance,
                            MatrixMetric::Time => cell.time,
                        };
                    }
                }

                if let Some(index) = filled.iter().position(|filled| !filled) {
                    return Err(MatrixShapeError(format!(
                        "cell ({}, {}) is missing",
                        index / num_targets,
                        index % num_targets
                    )));
                }

                Ok(matrix)
            }
            SourcesToTargets::Concise {
                durations,
                distances,
            } => {
                let rows = match metric {
                    MatrixMetric::Distance => distances,
                    MatrixMetric::Time => durations,
                }
                .ok_or_else(|| MatrixShapeError(format!("missing {metric} annotations")))?;

                CostMatrix::from_rows(rows, num_sources, num_targets)
            }
        }
    }
}
