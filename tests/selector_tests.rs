mod support;

use glazed::{
    BoundingBox, CutAxis, HalfSpaceSelector, Mesh,
    errors::GeometryError,
    float_types::{KEEP_BAND, Real},
};
use nalgebra::{Point3, Vector3};

#[test]
fn cutting_plane_goes_through_box_mean_along_corner_four() {
    let bb = BoundingBox::from_min_max(Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 6.0, 4.0));
    let plane = HalfSpaceSelector::default()
        .cutting_plane(&bb)
        .expect("box has volume");

    let mean = bb.corners.iter().fold(Vector3::zeros(), |acc, c| acc + c.coords) / 8.0;
    approx::assert_relative_eq!(bb.center().coords, mean);
    approx::assert_relative_eq!(plane.normal(), (bb.corners[4] - bb.corners[0]).normalize());
    approx::assert_relative_eq!(plane.signed_distance(&bb.center()), 0.0);
}

#[test]
fn classification_is_deterministic() {
    let bb = support::unit_box();
    let points: Vec<_> = (0..50)
        .map(|i| {
            let t = i as Real / 49.0;
            Point3::new(t - 0.5, 0.3 * t, 2.0 * t - 1.0)
        })
        .collect();
    let selector = HalfSpaceSelector::default();

    let first = selector.classify(&bb, &points).expect("valid box");
    for _ in 0..5 {
        assert_eq!(selector.classify(&bb, &points).expect("valid box"), first);
    }
}

#[test]
fn boundary_sits_exactly_at_keep_band() {
    let bb = support::unit_box();
    let eps = 1e-6;
    let points = [
        Point3::new(0.0, 0.0, KEEP_BAND),
        Point3::new(0.0, 0.0, KEEP_BAND + eps),
        Point3::new(0.0, 0.0, KEEP_BAND - eps),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, -0.5),
    ];

    let selection = HalfSpaceSelector::default()
        .classify(&bb, &points)
        .expect("valid box");
    assert_eq!(selection.as_slice(), &[true, true, false, false, false]);
}

#[test]
fn kept_and_discarded_partition_all_vertices() {
    let bb = support::unit_box();
    let mut points = support::grid_at(0.5, 4);
    points.extend(support::grid_at(0.005, 4));
    points.extend(support::grid_at(-0.7, 4));

    let split = HalfSpaceSelector::default()
        .partition(&bb, &points)
        .expect("valid box");

    assert_eq!(split.vertex_count(), points.len());
    assert_eq!(split.kept, (0..16).collect::<Vec<_>>());
    assert_eq!(split.discarded, (16..48).collect::<Vec<_>>());

    let mut all: Vec<usize> = split.kept.iter().chain(&split.discarded).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (0..points.len()).collect::<Vec<_>>());
}

#[test]
fn discard_selection_is_inverse_of_classification() {
    let bb = support::unit_box();
    let points = support::mirrored_column(&[0.2, 0.005, 0.8]);
    let selector = HalfSpaceSelector::default();

    let marked = selector.classify(&bb, &points).expect("valid box");
    let discard = selector.discard_selection(&bb, &points).expect("valid box");

    assert_eq!(discard, marked.inverted());
    for i in 0..points.len() {
        let d = points[i].z;
        assert_eq!(discard.is_selected(i), d < KEEP_BAND, "vertex {i} at d = {d}");
    }
}

#[test]
fn symmetric_box_splits_symmetric_points_evenly() {
    let bb = support::unit_box();
    assert_eq!(bb.center(), Point3::origin());

    let points = support::mirrored_column(&[0.1, 0.35, 0.6, 0.95]);
    let split = HalfSpaceSelector::default()
        .partition(&bb, &points)
        .expect("valid box");

    assert_eq!(split.kept.len(), split.discarded.len());
    assert!(split.kept.iter().all(|&i| points[i].z > 0.0));
}

#[test]
fn identical_corners_are_invalid_geometry() {
    let p = Point3::new(0.5, 0.5, 0.5);
    let bb = BoundingBox::from_corners([p; 8]);
    let points = [Point3::new(0.0, 0.0, 1.0)];

    let err = HalfSpaceSelector::default()
        .classify(&bb, &points)
        .unwrap_err();
    assert_eq!(
        err,
        GeometryError::InvalidGeometry {
            reference: p,
            axis: Vector3::zeros(),
        }
    );
}

#[test]
fn non_finite_box_is_invalid_geometry() {
    let bb = BoundingBox::from_min_max(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, Real::INFINITY, 1.0));
    let result = HalfSpaceSelector::default().classify(&bb, &[Point3::origin()]);
    assert!(matches!(result, Err(GeometryError::InvalidGeometry { .. })));
}

#[test]
fn empty_vertex_set_is_a_no_op() {
    // Even a degenerate box is fine when there is nothing to classify.
    let bb = BoundingBox::from_corners([Point3::origin(); 8]);
    let selection = HalfSpaceSelector::default()
        .classify(&bb, &[])
        .expect("empty input never fails");
    assert!(selection.is_empty());

    let split = HalfSpaceSelector::default()
        .partition(&bb, &[])
        .expect("empty input never fails");
    assert!(split.kept.is_empty() && split.discarded.is_empty());
}

#[test]
fn cut_follows_local_box_edges_not_world_axes() {
    // A box whose "Z" edge (corner 4 - corner 0) points along world +X.
    let corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 1.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 1.0, 0.0),
        Point3::new(2.0, 1.0, 1.0),
        Point3::new(2.0, 0.0, 1.0),
    ];
    let bb = BoundingBox::from_corners(corners);
    assert_eq!(bb.center(), Point3::new(1.0, 0.5, 0.5));

    let points = [
        Point3::new(1.5, 0.0, -3.0), // far below in world z, but in front along +X
        Point3::new(0.5, 0.9, 3.0),
    ];
    let split = HalfSpaceSelector::default()
        .partition(&bb, &points)
        .expect("valid box");
    assert_eq!(split.kept, vec![0]);
    assert_eq!(split.discarded, vec![1]);
}

#[test]
fn companion_axes_are_exposed_and_selectable() {
    let bb = BoundingBox::from_min_max(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
    let [z, y, x] = bb.axes();
    assert_eq!(z, Vector3::new(0.0, 0.0, 6.0));
    assert_eq!(y, Vector3::new(0.0, 4.0, 0.0));
    assert_eq!(x, Vector3::new(2.0, 0.0, 0.0));

    let points = [Point3::new(0.5, -1.0, -1.0), Point3::new(-0.5, 1.0, 1.0)];
    let along_x = HalfSpaceSelector::new(CutAxis::X, KEEP_BAND)
        .partition(&bb, &points)
        .expect("valid box");
    let along_y = HalfSpaceSelector::new(CutAxis::Y, KEEP_BAND)
        .partition(&bb, &points)
        .expect("valid box");
    assert_eq!(along_x.kept, vec![0]);
    assert_eq!(along_y.kept, vec![1]);
}

#[test]
fn zero_keep_band_keeps_on_plane_vertices() {
    let bb = support::unit_box();
    let points = [Point3::new(0.3, 0.3, 0.0), Point3::new(0.3, 0.3, -1e-9)];
    let split = HalfSpaceSelector::new(CutAxis::Z, 0.0)
        .partition(&bb, &points)
        .expect("valid box");
    assert_eq!(split.kept, vec![0]);
}

#[test]
fn mesh_entry_points_use_the_mesh_bounding_box() {
    // Unit cube on the origin: corners 4..8 are the z = 1 layer.
    let cube: Mesh<()> = Mesh::cuboid(1.0, 1.0, 1.0, None);
    let selector = HalfSpaceSelector::default();

    let selection = selector.classify_mesh(&cube).expect("cube has volume");
    assert_eq!(
        selection,
        selector
            .classify(&cube.bounding_box(), &cube.positions())
            .expect("cube has volume")
    );
    assert_eq!(selection.selected().collect::<Vec<_>>(), vec![4, 5, 6, 7]);

    let split = selector.partition_mesh(&cube).expect("cube has volume");
    assert_eq!(split.kept, vec![4, 5, 6, 7]);
    assert_eq!(split.discarded, vec![0, 1, 2, 3]);

    let empty: Mesh<()> = Mesh::new();
    assert!(selector.classify_mesh(&empty).expect("no-op").is_empty());
    assert_eq!(selector.partition_mesh(&empty).expect("no-op").vertex_count(), 0);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_marking_matches_plane_distances() {
    let bb = support::unit_box();
    let points: Vec<_> = (0..40)
        .flat_map(|k| support::grid_at(-1.0 + k as Real / 19.5, 60))
        .collect();
    let selector = HalfSpaceSelector::default();
    let plane = selector.cutting_plane(&bb).expect("valid box");

    let selection = selector.classify(&bb, &points).expect("valid box");
    assert_eq!(selection.len(), points.len());
    for (i, p) in points.iter().enumerate() {
        assert_eq!(
            selection.is_selected(i),
            plane.signed_distance(p) >= KEEP_BAND,
            "point {i} at {p}"
        );
    }
}
