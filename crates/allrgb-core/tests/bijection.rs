// crates/allrgb-core/tests/bijection.rs

use allrgb_core::cube::enumerate::Ordering;
use allrgb_core::pipeline::{julia_field, render};
use allrgb_core::plan::defaults::{default_plan, reduced_plan};
use allrgb_core::{Cube, IntensityField, Plan};

fn plans(cube_bits: u8) -> Vec<Plan> {
    let mut out = Vec::new();
    for ordering in [Ordering::Sequential, Ordering::Morton] {
        for shuffle in [false, true] {
            for descending in [false, true] {
                let mut p = reduced_plan(cube_bits);
                p.ordering = ordering;
                p.shuffle = shuffle;
                p.descending = descending;
                out.push(p);
            }
        }
    }
    out
}

#[test]
fn julia_renders_are_bijective_for_every_mode() {
    for bits in [1u8, 2, 4, 5] {
        for p in plans(bits) {
            let field = julia_field(&p).unwrap();
            let r = render(&p, &field).unwrap();
            r.grid.verify_bijection(p.cube().unwrap()).unwrap();
        }
    }
}

#[test]
fn constant_field_is_a_permutation_of_the_reduced_cube() {
    for p in plans(4) {
        let field = IntensityField::constant(64, 64, p.buckets, 0).unwrap();
        let r = render(&p, &field).unwrap();
        assert_eq!(r.histogram.counts()[0], 4096);
        assert_eq!(r.offsets.ends()[0], 4096);
        r.grid.verify_bijection(Cube::new(4).unwrap()).unwrap();
    }
}

#[test]
fn checkerboard_splits_the_index_space() {
    let mut p = reduced_plan(4);
    p.ordering = Ordering::Sequential;
    p.shuffle = false;
    p.buckets = 2;
    let field = IntensityField::from_source(64, 64, 2, &|x: u32, y: u32| ((x + y) % 2) as u16).unwrap();

    let r = render(&p, &field).unwrap();
    let e = p.enumerator().unwrap();
    for y in 0..64 {
        for x in 0..64 {
            let i = e.index_of(r.grid.get(x, y)).unwrap();
            if (x + y) % 2 == 0 {
                assert!(i < 2048, "({x},{y}) -> {i}");
            } else {
                assert!((2048..4096).contains(&i), "({x},{y}) -> {i}");
            }
        }
    }

    // Row-major visitation, counting down inside each bucket.
    assert_eq!(e.index_of(r.grid.get(0, 0)).unwrap(), 2047);
    assert_eq!(e.index_of(r.grid.get(1, 0)).unwrap(), 4095);
    assert_eq!(e.index_of(r.grid.get(2, 0)).unwrap(), 2046);
    assert_eq!(e.index_of(r.grid.get(63, 63)).unwrap(), 0);
}

#[test]
fn unshuffled_colours_stay_in_their_bucket_range() {
    for ordering in [Ordering::Sequential, Ordering::Morton] {
        let mut p = reduced_plan(5);
        p.ordering = ordering;
        p.shuffle = false;
        let field = julia_field(&p).unwrap();
        let r = render(&p, &field).unwrap();
        let e = p.enumerator().unwrap();
        for y in 0..p.height {
            for x in 0..p.width {
                let b = field.get(x, y) as usize;
                let i = e.index_of(r.grid.get(x, y)).unwrap();
                assert!(r.offsets.range(b).contains(&i), "({x},{y}) bucket={b} index={i}");
            }
        }
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut p = reduced_plan(4);
    p.width = 32;
    let field = IntensityField::constant(32, 64, p.buckets, 0).unwrap();
    let err = render(&p, &field).unwrap_err();
    assert!(format!("{err}").contains("cannot hold"));

    let p = reduced_plan(4);
    let field = IntensityField::constant(64, 64, 16, 0).unwrap();
    assert!(render(&p, &field).is_err());
}

#[test]
fn full_cube_xor_field_is_allrgb() {
    let p = default_plan();
    let field = IntensityField::from_source(p.width, p.height, p.buckets, &|x: u32, y: u32| {
        ((x ^ y) & 0xFF) as u16
    })
    .unwrap();
    let r = render(&p, &field).unwrap();
    r.grid.verify_bijection(Cube::FULL).unwrap();
}

#[test]
#[ignore = "full 4096x4096 julia set; slow in debug builds"]
fn full_cube_julia_is_allrgb() {
    let p = default_plan();
    let field = julia_field(&p).unwrap();
    let r = render(&p, &field).unwrap();
    r.grid.verify_bijection(Cube::FULL).unwrap();
}
