// crates/allrgb-core/tests/plan_id_stable.rs

use allrgb_core::plan::{defaults, format};

#[test]
fn plan_id_is_stable_for_same_plan() {
    let p = defaults::default_plan();
    assert_eq!(format::plan_id_16(&p), format::plan_id_16(&p.clone()));
    assert_eq!(format::plan_id_hex(&p).len(), 32);
}

#[test]
fn plan_id_changes_with_any_knob() {
    let base = defaults::default_plan();
    let id0 = format::plan_id_16(&base);

    let mut seed = base.clone();
    seed.seed = seed.seed.wrapping_add(1);
    let mut shuffle = base.clone();
    shuffle.shuffle = !shuffle.shuffle;
    let mut zoom = base.clone();
    zoom.julia.zoom *= 2.0;

    for p in [seed, shuffle, zoom] {
        assert_ne!(format::plan_id_16(&p), id0, "{p:?}");
    }
}

#[test]
fn plan_file_roundtrip() {
    let mut p = defaults::reduced_plan(4);
    p.descending = true;
    p.julia.c_im = -0.1234;
    let bytes = format::encode(&p);
    assert_eq!(format::decode(&bytes).unwrap(), p);
}
