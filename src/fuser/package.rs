//! Per-package constraint reduction
//!
//! Each operator bucket is reduced to its tightest bound, then the
//! buckets are intersected:
//! - `<` / `<=`: the smallest version
//! - `>` / `>=`: the largest version
//! - `==`: must hold a single distinct version
//!
//! A pin is checked against every other bucket and wins if it satisfies
//! them all. Without a pin, the lower and upper bounds are kept with their
//! own operators.

use crate::domain::{Bound, Operator, ResolvedConstraint, Version, VersionSpec};
use crate::error::FuseError;

/// Tightest bound of each operator bucket
#[derive(Debug, Default)]
struct OperatorBuckets {
    less: Option<Version>,
    less_or_equal: Option<Version>,
    equal: Option<Version>,
    greater_or_equal: Option<Version>,
    greater: Option<Version>,
}

impl OperatorBuckets {
    /// Bucket every bound, failing on a second distinct `==` version
    fn collect(bounds: &[Bound]) -> Result<Self, Vec<Version>> {
        let mut buckets = Self::default();
        let mut pins: Vec<Version> = Vec::new();

        for bound in bounds {
            let v = bound.version;
            match bound.operator {
                Operator::Less => buckets.less = Some(min_of(buckets.less, v)),
                Operator::LessOrEqual => {
                    buckets.less_or_equal = Some(min_of(buckets.less_or_equal, v))
                }
                Operator::GreaterOrEqual => {
                    buckets.greater_or_equal = Some(max_of(buckets.greater_or_equal, v))
                }
                Operator::Greater => buckets.greater = Some(max_of(buckets.greater, v)),
                Operator::Equal => {
                    if !pins.contains(&v) {
                        pins.push(v);
                    }
                }
            }
        }

        if pins.len() > 1 {
            pins.sort();
            return Err(pins);
        }
        buckets.equal = pins.first().copied();
        Ok(buckets)
    }

    /// Tightest lower bound; `>=` wins over `>` on the same version
    fn floor(&self) -> Option<Bound> {
        let inclusive = self
            .greater_or_equal
            .map(|v| Bound::new(Operator::GreaterOrEqual, v));
        let exclusive = self.greater.map(|v| Bound::new(Operator::Greater, v));
        match (inclusive, exclusive) {
            (Some(ge), Some(gt)) if gt.version > ge.version => Some(gt),
            (Some(ge), _) => Some(ge),
            (None, gt) => gt,
        }
    }

    /// Tightest upper bound; `<=` wins over `<` on the same version
    fn roof(&self) -> Option<Bound> {
        let inclusive = self
            .less_or_equal
            .map(|v| Bound::new(Operator::LessOrEqual, v));
        let exclusive = self.less.map(|v| Bound::new(Operator::Less, v));
        match (inclusive, exclusive) {
            (Some(le), Some(lt)) if lt.version < le.version => Some(lt),
            (Some(le), _) => Some(le),
            (None, lt) => lt,
        }
    }

    /// The non-pin bucket bounds, for checking a pin against them
    fn open_bounds(&self) -> impl Iterator<Item = Bound> {
        [
            self.less.map(|v| Bound::new(Operator::Less, v)),
            self.less_or_equal
                .map(|v| Bound::new(Operator::LessOrEqual, v)),
            self.greater_or_equal
                .map(|v| Bound::new(Operator::GreaterOrEqual, v)),
            self.greater.map(|v| Bound::new(Operator::Greater, v)),
        ]
        .into_iter()
        .flatten()
    }
}

fn min_of(current: Option<Version>, v: Version) -> Version {
    current.map_or(v, |c| c.min(v))
}

fn max_of(current: Option<Version>, v: Version) -> Version {
    current.map_or(v, |c| c.max(v))
}

/// Fuse every version specification of one package into a single constraint
pub fn fuse_package(package: &str, specs: &[VersionSpec]) -> Result<ResolvedConstraint, FuseError> {
    let bounds: Vec<Bound> = specs.iter().filter_map(VersionSpec::as_bound).copied().collect();

    if bounds.is_empty() {
        return Ok(ResolvedConstraint::Unconstrained);
    }

    let conflict = || FuseError::conflict(package, format_bounds(&bounds));

    let buckets = OperatorBuckets::collect(&bounds).map_err(|pins| {
        let pins: Vec<Bound> = pins
            .into_iter()
            .map(|v| Bound::new(Operator::Equal, v))
            .collect();
        FuseError::conflict(package, format_bounds(&pins))
    })?;

    if let Some(pin) = buckets.equal {
        if buckets.open_bounds().all(|bound| bound.admits(pin)) {
            return Ok(ResolvedConstraint::Pinned(pin));
        }
        return Err(conflict());
    }

    match (buckets.floor(), buckets.roof()) {
        (None, None) => Ok(ResolvedConstraint::Unconstrained),
        (Some(lower), None) => Ok(ResolvedConstraint::Lower(lower)),
        (None, Some(upper)) => Ok(ResolvedConstraint::Upper(upper)),
        (Some(lower), Some(upper)) => {
            if upper.version < lower.version {
                return Err(conflict());
            }
            if upper.version == lower.version {
                // A single point survives only if both sides include it
                if lower.operator.is_inclusive() && upper.operator.is_inclusive() {
                    return Ok(ResolvedConstraint::Pinned(lower.version));
                }
                return Err(conflict());
            }
            Ok(ResolvedConstraint::Range { lower, upper })
        }
    }
}

/// Render bounds as `[>=2.2, <=3.0]` for error messages
fn format_bounds(bounds: &[Bound]) -> String {
    let parts: Vec<String> = bounds.iter().map(Bound::to_string).collect();
    format!("[{}]", parts.join(", "))
}
