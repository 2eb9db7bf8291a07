// crates/allrgb-core/src/pipeline.rs
//
// Field -> histogram -> offsets -> permutation -> assignment, driven by a Plan.

use log::{debug, info, warn};

use crate::assign::engine::AssignmentEngine;
use crate::assign::grid::OutputGrid;
use crate::bucket::histogram::{CumulativeOffsets, Histogram};
use crate::bucket::permute::{PermutationTable, SeededSource, UniformSource};
use crate::error::{AllRgbError, Result};
use crate::field::grid::IntensityField;
use crate::field::julia::JuliaSet;
use crate::plan::plan::Plan;
use crate::validate::validate_plan;

/// A finished run plus the bookkeeping that produced it.
#[derive(Clone, Debug)]
pub struct Rendering {
    pub grid: OutputGrid,
    pub histogram: Histogram,
    pub offsets: CumulativeOffsets,
}

/// The plan's Julia set sampled at the plan's size.
pub fn julia_field(plan: &Plan) -> Result<IntensityField> {
    validate_plan(plan)?;
    let julia = JuliaSet::new(plan.julia, plan.width, plan.height, plan.buckets);
    IntensityField::from_source(plan.width, plan.height, plan.buckets, &julia)
}

/// Render with the plan's own seeded shuffle.
pub fn render(plan: &Plan, field: &IntensityField) -> Result<Rendering> {
    let mut src = SeededSource::new(plan.seed);
    render_with_source(plan, field, &mut src)
}

/// Render drawing shuffle randomness from `src`. With `plan.shuffle` off the
/// source is never touched and the permutation stays the identity.
pub fn render_with_source<S: UniformSource + ?Sized>(
    plan: &Plan,
    field: &IntensityField,
    src: &mut S,
) -> Result<Rendering> {
    validate_plan(plan)?;
    if field.width() != plan.width || field.height() != plan.height {
        return Err(AllRgbError::Precondition(format!(
            "field is {}x{}, plan wants {}x{}",
            field.width(),
            field.height(),
            plan.width,
            plan.height
        )));
    }
    if field.buckets() != plan.buckets {
        return Err(AllRgbError::Precondition(format!(
            "field has {} buckets, plan wants {}",
            field.buckets(),
            plan.buckets
        )));
    }

    let enumerator = plan.enumerator()?;
    let n = enumerator.cube.colours();

    let histogram = Histogram::build(field);
    let offsets = CumulativeOffsets::from_histogram(&histogram);
    offsets.check_total(n)?;
    debug!(
        "histogram: {} of {} buckets used, largest={:?}",
        histogram.non_empty(),
        histogram.buckets(),
        histogram.largest()
    );
    if histogram.non_empty() == 1 {
        warn!("intensity field occupies a single bucket; output follows pure enumeration order");
    }

    let mut table = PermutationTable::identity(n);
    if plan.shuffle {
        table.shuffle_buckets(&offsets, src)?;
        debug!("shuffled {} bucket ranges", offsets.buckets());
    }

    let grid = AssignmentEngine::new(&histogram, &offsets, &table, enumerator)?.run(field)?;
    info!(
        "rendered {}x{} ({:?}, descending={}, shuffle={})",
        grid.width(),
        grid.height(),
        plan.ordering,
        plan.descending,
        plan.shuffle
    );

    Ok(Rendering {
        grid,
        histogram,
        offsets,
    })
}
