//! Gradient-boosted decision trees for binary classification.
//!
//! Logistic loss. The model starts from the prior log-odds; each boosting
//! iteration fits a depth-limited regression tree to the gradient residuals
//! (label minus predicted probability) with Newton leaf values and greedy
//! gain-maximizing splits. When a column offers more split candidates than
//! the configured cap, candidates are subsampled with the seeded StdRng, so
//! a fit is fully reproducible for a given seed. Training stops early once
//! the residuals vanish; single-class training data short-circuits to a
//! constant model.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ModelError;

/// Leaf denominator regularizer.
const LAMBDA: f64 = 1e-6;
/// Newton leaf values are clamped to this magnitude.
const MAX_LEAF_VALUE: f64 = 4.0;
/// Nodes with fewer samples become leaves.
const MIN_SPLIT_SAMPLES: usize = 2;
/// Residual magnitude below which training stops.
const RESIDUAL_EPSILON: f64 = 1e-7;
/// Split gain below which a node becomes a leaf.
const MIN_GAIN: f64 = 1e-12;

/// Boosting hyperparameters.
#[derive(Debug, Clone)]
pub struct GbtParams {
    /// Upper bound on boosting iterations (trees).
    pub iterations: usize,
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Shrinkage applied to each tree's contribution.
    pub learning_rate: f64,
    /// Cap on split candidates per column before subsampling kicks in.
    pub max_split_candidates: usize,
    /// Seed for the candidate-subsampling RNG.
    pub seed: u64,
}

impl Default for GbtParams {
    fn default() -> Self {
        Self {
            iterations: 200,
            max_depth: 5,
            learning_rate: 0.1,
            max_split_candidates: 32,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
enum Tree {
    Leaf {
        value: f64,
    },
    Node {
        feature: usize,
        threshold: f64,
        left: Box<Tree>,
        right: Box<Tree>,
    },
}

impl Tree {
    fn predict(&self, row: &[f64]) -> f64 {
        match self {
            Tree::Leaf { value } => *value,
            Tree::Node {
                feature,
                threshold,
                left,
                right,
            } => {
                if row[*feature] <= *threshold {
                    left.predict(row)
                } else {
                    right.predict(row)
                }
            }
        }
    }
}

/// A fitted binary classifier.
#[derive(Debug, Clone)]
pub struct GradientBoostedTrees {
    init_score: f64,
    learning_rate: f64,
    trees: Vec<Tree>,
    constant_class: Option<bool>,
    dim: usize,
}

impl GradientBoostedTrees {
    /// Fit on a sample matrix and parallel boolean labels.
    pub fn fit(
        samples: &[Vec<f64>],
        labels: &[bool],
        params: &GbtParams,
    ) -> Result<Self, ModelError> {
        let first = samples.first().ok_or(ModelError::EmptyTrainingSet)?;
        let dim = first.len();
        let n = samples.len();

        if labels.len() != n {
            return Err(ModelError::LabelMismatch {
                samples: n,
                labels: labels.len(),
            });
        }
        for row in samples {
            if row.len() != dim {
                return Err(ModelError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
        }

        let positives = labels.iter().filter(|&&y| y).count();
        if positives == 0 || positives == n {
            return Ok(Self {
                init_score: 0.0,
                learning_rate: params.learning_rate,
                trees: Vec::new(),
                constant_class: Some(positives == n),
                dim,
            });
        }

        let p0 = positives as f64 / n as f64;
        let init_score = (p0 / (1.0 - p0)).ln();
        let mut scores = vec![init_score; n];
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut trees = Vec::new();

        for _ in 0..params.iterations {
            let probs: Vec<f64> = scores.iter().map(|&s| sigmoid(s)).collect();
            let residuals: Vec<f64> = labels
                .iter()
                .zip(&probs)
                .map(|(&y, &p)| if y { 1.0 - p } else { -p })
                .collect();

            if residuals.iter().all(|r| r.abs() < RESIDUAL_EPSILON) {
                break;
            }

            let hessians: Vec<f64> = probs.iter().map(|&p| p * (1.0 - p)).collect();
            let indices: Vec<usize> = (0..n).collect();
            let tree = grow_tree(samples, &residuals, &hessians, &indices, 0, params, &mut rng);

            for (score, row) in scores.iter_mut().zip(samples) {
                *score += params.learning_rate * tree.predict(row);
            }
            trees.push(tree);
        }

        Ok(Self {
            init_score,
            learning_rate: params.learning_rate,
            trees,
            constant_class: None,
            dim,
        })
    }

    /// Probability of the positive class for one row.
    pub fn predict_proba(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.dim {
            return Err(ModelError::DimensionMismatch {
                expected: self.dim,
                got: row.len(),
            });
        }
        if let Some(class) = self.constant_class {
            return Ok(if class { 1.0 } else { 0.0 });
        }
        let mut score = self.init_score;
        for tree in &self.trees {
            score += self.learning_rate * tree.predict(row);
        }
        Ok(sigmoid(score))
    }

    /// Class prediction for one row.
    pub fn predict(&self, row: &[f64]) -> Result<bool, ModelError> {
        Ok(self.predict_proba(row)? > 0.5)
    }

    /// Number of fitted trees (early stop may leave fewer than requested).
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn grow_tree(
    samples: &[Vec<f64>],
    residuals: &[f64],
    hessians: &[f64],
    indices: &[usize],
    depth: usize,
    params: &GbtParams,
    rng: &mut StdRng,
) -> Tree {
    if depth >= params.max_depth || indices.len() < MIN_SPLIT_SAMPLES {
        return make_leaf(residuals, hessians, indices);
    }

    let sum_r: f64 = indices.iter().map(|&i| residuals[i]).sum();
    let sum_h: f64 = indices.iter().map(|&i| hessians[i]).sum();
    let parent_score = sum_r * sum_r / (sum_h + LAMBDA);

    let dim = samples[indices[0]].len();
    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..dim {
        let mut values: Vec<f64> = indices.iter().map(|&i| samples[i][feature]).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();
        if values.len() < 2 {
            continue;
        }

        let mut candidates: Vec<f64> = values.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
        if candidates.len() > params.max_split_candidates {
            let chosen =
                rand::seq::index::sample(rng, candidates.len(), params.max_split_candidates);
            let mut sampled: Vec<f64> = chosen.iter().map(|k| candidates[k]).collect();
            sampled.sort_by(|a, b| a.total_cmp(b));
            candidates = sampled;
        }

        for &threshold in &candidates {
            let mut left_r = 0.0;
            let mut left_h = 0.0;
            let mut left_n = 0usize;
            for &i in indices {
                if samples[i][feature] <= threshold {
                    left_r += residuals[i];
                    left_h += hessians[i];
                    left_n += 1;
                }
            }
            if left_n == 0 || left_n == indices.len() {
                continue;
            }

            let right_r = sum_r - left_r;
            let right_h = sum_h - left_h;
            let gain = left_r * left_r / (left_h + LAMBDA)
                + right_r * right_r / (right_h + LAMBDA)
                - parent_score;

            if gain > best.map_or(MIN_GAIN, |(_, _, g)| g) {
                best = Some((feature, threshold, gain));
            }
        }
    }

    match best {
        None => make_leaf(residuals, hessians, indices),
        Some((feature, threshold, _)) => {
            let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .copied()
                .partition(|&i| samples[i][feature] <= threshold);
            let left = grow_tree(samples, residuals, hessians, &left_idx, depth + 1, params, rng);
            let right =
                grow_tree(samples, residuals, hessians, &right_idx, depth + 1, params, rng);
            Tree::Node {
                feature,
                threshold,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
    }
}

fn make_leaf(residuals: &[f64], hessians: &[f64], indices: &[usize]) -> Tree {
    let sum_r: f64 = indices.iter().map(|&i| residuals[i]).sum();
    let sum_h: f64 = indices.iter().map(|&i| hessians[i]).sum();
    let value = (sum_r / (sum_h + LAMBDA)).clamp(-MAX_LEAF_VALUE, MAX_LEAF_VALUE);
    Tree::Leaf { value }
}
