#[macro_use]
extern crate pretty_assertions;

use nrrd_stream::{locate_voxel, ByteRange, Endianness, NrrdError, NrrdHeader};
use std::collections::HashMap;

fn header(sizes: Vec<u32>, type_name: &str) -> NrrdHeader {
    NrrdHeader {
        magic: "NRRD0004".to_owned(),
        dimension: Some(3),
        sizes: Some(sizes),
        space_directions: Some(vec![[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]]),
        space_origin: Some([0., 0., 0.]),
        kinds: None,
        space_dimension: None,
        type_name: Some(type_name.to_owned()),
        encoding: Some("raw".to_owned()),
        endianness: Endianness::LE,
        extra: HashMap::new(),
    }
}

#[test]
fn identity_transform_rounds_to_nearest_voxel() {
    let h = header(vec![10, 10, 10], "uint8");
    let fetch = locate_voxel(&h, 0, [1.2, 2.7, 3.5]).unwrap();
    assert_eq!(fetch.voxel, [1, 3, 4]);
}

#[test]
fn translated_and_scaled_grid() {
    let mut h = header(vec![100, 100, 100], "uint8");
    h.space_directions = Some(vec![[2., 0., 0.], [0., 2., 0.], [0., 0., 2.]]);
    h.space_origin = Some([10., 10., 10.]);
    let fetch = locate_voxel(&h, 0, [20., 10., 14.]).unwrap();
    assert_eq!(fetch.voxel, [5, 0, 2]);
}

#[test]
fn upper_bound_is_inclusive() {
    let h = header(vec![10, 10, 10], "uint8");
    // the axis extent itself is accepted, one past the last voxel
    assert!(locate_voxel(&h, 0, [10., 5., 5.]).is_ok());
    let err = locate_voxel(&h, 0, [11., 5., 5.]).unwrap_err();
    assert!(matches!(err, NrrdError::OutOfVolume([11, 5, 5])));
    let err = locate_voxel(&h, 0, [-1., 5., 5.]).unwrap_err();
    assert!(matches!(err, NrrdError::OutOfVolume([-1, 5, 5])));
}

#[test]
fn flat_index_is_row_major_x_fastest() {
    let h = header(vec![4, 5, 6], "uint8");
    // index = 4*5*3 + 4*2 + 1 = 69
    let fetch = locate_voxel(&h, 100, [1., 2., 3.]).unwrap();
    assert_eq!(fetch.voxel, [1, 2, 3]);
    assert_eq!(fetch.range, ByteRange { start: 169, end: 169 });
}

#[test]
fn byte_range_scales_with_element_width() {
    let h = header(vec![4, 5, 6], "uint16");
    let fetch = locate_voxel(&h, 100, [1., 2., 3.]).unwrap();
    assert_eq!(fetch.range, ByteRange { start: 238, end: 239 });
    assert_eq!(fetch.range.num_bytes(), 2);

    let h = header(vec![4, 5, 6], "double");
    let fetch = locate_voxel(&h, 100, [1., 2., 3.]).unwrap();
    assert_eq!(fetch.range, ByteRange { start: 652, end: 659 });
}

#[test]
fn non_raw_encoding_is_rejected() {
    let mut h = header(vec![10, 10, 10], "uint8");
    h.encoding = Some("gzip".to_owned());
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::UnsupportedEncoding(e) if e == "gzip"));
}

#[test]
fn missing_grid_fields_are_reported() {
    let mut h = header(vec![10, 10, 10], "uint8");
    h.space_origin = None;
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::HeaderIncomplete("space origin")));

    let mut h = header(vec![10, 10, 10], "uint8");
    h.sizes = None;
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::HeaderIncomplete("sizes")));

    let mut h = header(vec![10, 10, 10], "uint8");
    h.space_directions = None;
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::HeaderIncomplete("space directions")));
}

#[test]
fn two_dimensional_grid_is_inconsistent() {
    let mut h = header(vec![10, 10], "uint8");
    h.space_directions = Some(vec![[1., 0., 0.], [0., 1., 0.]]);
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::HeaderMalformed(_)));
}

#[test]
fn unknown_type_is_rejected_before_geometry() {
    let h = header(vec![10, 10, 10], "quaternion");
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::UnknownScalarType(_)));
}

#[test]
fn degenerate_directions_are_rejected() {
    let mut h = header(vec![10, 10, 10], "uint8");
    h.space_directions = Some(vec![[1., 0., 0.], [1., 0., 0.], [0., 0., 1.]]);
    let err = locate_voxel(&h, 0, [1., 1., 1.]).unwrap_err();
    assert!(matches!(err, NrrdError::DegenerateGeometry));
}

#[test]
fn lookups_are_deterministic() {
    let h = header(vec![4, 5, 6], "uint16");
    let a = locate_voxel(&h, 42, [1., 2., 3.]).unwrap();
    let b = locate_voxel(&h, 42, [1., 2., 3.]).unwrap();
    assert_eq!(a, b);
}
