//! The regeneration coordinator.

use globe_borders::{
    AntimeridianFilter, BorderId, BorderIndex, BorderSegment, BorderVisibility,
    ClassificationSignature, RingCanonicalizer,
};
use globe_dataset::{Feature, FeatureRing};
use globe_mesh::{
    BorderKind, EarcutTriangulator, ExtrusionMeshBuilder, GlobeShells, MeshError, SolidMesh,
    Triangulator, build_border_line,
};

use crate::picking::nearest_triangle_hit;
use crate::{
    BuildReport, GlobeParams, MaterialPreset, MaterialProperty, PickHit, Ray, RebuildError,
    RegionMaterial, RegionMesh,
};

/// Whether derived state currently reflects the parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildState {
    /// Regions, index, and shells match [`Globe::params`].
    Stable,
    /// A rebuild is replaying the dataset. Only seen from inside the rebuild,
    /// which holds `&mut Globe` throughout.
    Rebuilding,
}

/// Everything derived from one build.
struct Derived {
    regions: Vec<RegionMesh>,
    index: BorderIndex,
    shells: GlobeShells,
    report: BuildReport,
}

/// The dataset and every piece of geometry derived from it.
///
/// Derived state is never patched: every change of parameters or dataset
/// discards regions, border segments, and shells, then replays every cached
/// ring and classifies once.
pub struct Globe<T: Triangulator + Clone = EarcutTriangulator> {
    params: GlobeParams,
    triangulator: T,
    state: BuildState,
    features: Vec<Feature>,
    regions: Vec<RegionMesh>,
    index: BorderIndex,
    shells: GlobeShells,
    material: RegionMaterial,
    last_report: BuildReport,
}

impl Globe<EarcutTriangulator> {
    /// An empty globe with validated parameters and the earcut backend.
    pub fn new(params: GlobeParams) -> Result<Self, RebuildError> {
        Self::with_triangulator(params, EarcutTriangulator)
    }
}

impl<T: Triangulator + Clone> Globe<T> {
    /// An empty globe with a custom triangulation backend.
    ///
    /// The shells are generated immediately; there are no regions until
    /// [`Globe::ingest`].
    pub fn with_triangulator(params: GlobeParams, triangulator: T) -> Result<Self, RebuildError> {
        params.validate()?;
        Ok(Self {
            shells: GlobeShells::generate(&params.shells()),
            params,
            triangulator,
            state: BuildState::Stable,
            features: Vec::new(),
            regions: Vec::new(),
            index: BorderIndex::new(),
            material: RegionMaterial::default(),
            last_report: BuildReport::default(),
        })
    }

    // -- dataset and parameters ---------------------------------------------

    /// Replace the cached dataset and build from it.
    pub fn ingest(&mut self, features: Vec<Feature>) -> Result<BuildReport, RebuildError> {
        self.features = features;
        self.rebuild()
    }

    /// Discard all derived state and rebuild it from the cached dataset.
    ///
    /// On error the regions and border index are left empty, the shells are
    /// regenerated for the current parameters, and the state returns to
    /// [`BuildState::Stable`].
    pub fn rebuild(&mut self) -> Result<BuildReport, RebuildError> {
        self.state = BuildState::Rebuilding;
        self.regions.clear();
        self.index.clear();
        self.last_report = BuildReport::default();

        let result = self.build();
        self.state = BuildState::Stable;
        match result {
            Ok(derived) => {
                tracing::info!(
                    radius = self.params.radius,
                    height = self.params.extrusion_height,
                    report = %derived.report,
                    "globe built"
                );
                self.regions = derived.regions;
                self.index = derived.index;
                self.shells = derived.shells;
                self.last_report = derived.report;
                Ok(derived.report)
            }
            Err(err) => {
                tracing::error!(%err, "globe build aborted, derived state cleared");
                self.shells = GlobeShells::generate(&self.params.shells());
                Err(err)
            }
        }
    }

    /// Validate and adopt `params`, then rebuild.
    ///
    /// Rejected parameters leave the current build untouched.
    pub fn apply_params(&mut self, params: GlobeParams) -> Result<BuildReport, RebuildError> {
        params.validate()?;
        self.params = params;
        self.rebuild()
    }

    /// Change the radius and rebuild.
    pub fn set_radius(&mut self, radius: f64) -> Result<BuildReport, RebuildError> {
        self.apply_params(GlobeParams {
            radius,
            ..self.params
        })
    }

    /// Change the extrusion height and rebuild.
    pub fn set_extrusion_height(&mut self, height: f64) -> Result<BuildReport, RebuildError> {
        self.apply_params(GlobeParams {
            extrusion_height: height,
            ..self.params
        })
    }

    /// Change the shell tessellation and rebuild.
    pub fn set_tessellation_segments(&mut self, segments: u32) -> Result<BuildReport, RebuildError> {
        self.apply_params(GlobeParams {
            tessellation_segments: segments,
            ..self.params
        })
    }

    /// Change radius and height together with a single rebuild.
    pub fn rebuild_at(&mut self, radius: f64, height: f64) -> Result<BuildReport, RebuildError> {
        self.apply_params(GlobeParams {
            radius,
            extrusion_height: height,
            ..self.params
        })
    }

    fn build(&self) -> Result<Derived, RebuildError> {
        let builder = ExtrusionMeshBuilder::with_triangulator(
            self.params.extrusion(),
            self.triangulator.clone(),
        );
        let canonicalizer = RingCanonicalizer::new(self.params.key_precision);
        let mut index = BorderIndex::new();
        let mut regions = Vec::new();
        let mut report = BuildReport {
            features: self.features.len(),
            ..Default::default()
        };

        for feature in &self.features {
            for FeatureRing { ring, role } in &feature.rings {
                tracing::debug!(
                    country = %feature.name,
                    ?role,
                    points = ring.len(),
                    winding = ?ring.winding(),
                    "extruding ring"
                );
                let solid = match builder.try_build(ring) {
                    Ok(solid) => solid,
                    Err(err @ MeshError::MalformedRing { .. }) => {
                        tracing::debug!(country = %feature.name, %err, "degenerate ring");
                        SolidMesh::empty()
                    }
                    Err(err @ MeshError::TriangulationUnavailable(_)) => {
                        tracing::warn!(country = %feature.name, %err, "region solid skipped");
                        SolidMesh::empty()
                    }
                    Err(err) => return Err(err.into()),
                };
                if solid.is_empty() {
                    report.empty_meshes += 1;
                }
                report.triangles += solid.triangle_count();

                let (external_border, internal_border) = if role.is_outer() {
                    report.outer_rings += 1;
                    let line = build_border_line(
                        ring,
                        self.params.radius,
                        self.params.border_offset,
                        BorderKind::External,
                    );
                    (Some(line), None)
                } else {
                    report.hole_rings += 1;
                    let line = build_border_line(
                        ring,
                        self.params.radius,
                        self.params.border_offset / 2.0,
                        BorderKind::Internal,
                    );
                    let key = canonicalizer.key(ring);
                    let segment = BorderSegment::new(feature.name.clone(), ring.clone(), key, line);
                    (None, Some(index.register(segment)))
                };

                regions.push(RegionMesh {
                    country: feature.name.clone(),
                    role: *role,
                    ring: ring.clone(),
                    solid,
                    external_border,
                    internal_border,
                    material: self.material,
                });
            }
        }

        report.classification =
            index.classify(&AntimeridianFilter::new(self.params.wrap_threshold_degrees));
        report.keys = index.key_count();

        Ok(Derived {
            regions,
            index,
            shells: GlobeShells::generate(&self.params.shells()),
            report,
        })
    }

    // -- materials ----------------------------------------------------------

    /// Apply a property change to the base material and every region.
    ///
    /// The base material is what the next rebuild gives every region.
    pub fn set_material_property(&mut self, property: MaterialProperty) {
        self.material.set(property);
        for region in &mut self.regions {
            region.material.set(property);
        }
    }

    /// Replace the base material and every region's material with a preset.
    pub fn apply_preset(&mut self, preset: MaterialPreset) {
        self.material = preset.material();
        for region in &mut self.regions {
            region.material = self.material;
        }
    }

    /// The material new regions are built with.
    pub fn material(&self) -> &RegionMaterial {
        &self.material
    }

    // -- queries ------------------------------------------------------------

    /// The parameters of the current build.
    pub fn params(&self) -> &GlobeParams {
        &self.params
    }

    /// Whether derived state matches the parameters.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// The cached dataset.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Region solids in dataset order.
    pub fn regions(&self) -> &[RegionMesh] {
        &self.regions
    }

    /// Mutable access for per-region material tweaks. Rebuilds reset them to
    /// the base material.
    pub fn region_mut(&mut self, index: usize) -> Option<&mut RegionMesh> {
        self.regions.get_mut(index)
    }

    /// Internal border segments of the current build.
    pub fn border_index(&self) -> &BorderIndex {
        &self.index
    }

    /// Ocean and atmosphere shells at the current radius.
    pub fn shells(&self) -> &GlobeShells {
        &self.shells
    }

    /// Report of the last successful build, zeroed after an aborted one.
    pub fn last_report(&self) -> &BuildReport {
        &self.last_report
    }

    /// Internal border segments owned by `country`.
    pub fn borders_for_country(&self, country: &str) -> Vec<BorderId> {
        self.index
            .segments_for_country(country)
            .map(|(id, _)| id)
            .collect()
    }

    /// The `shared` flag of a segment, `None` for an id not in this build.
    pub fn is_shared(&self, id: BorderId) -> Option<bool> {
        self.index.is_shared(id)
    }

    /// Internal border segments a viewer should draw under `mode`.
    pub fn visible_borders(&self, mode: BorderVisibility) -> Vec<BorderId> {
        self.index.visible(mode).map(|(id, _)| id).collect()
    }

    /// Keys and `shared` flags of the current build.
    pub fn signature(&self) -> ClassificationSignature {
        self.index.signature()
    }

    /// Nearest region solid hit by `ray`, with the borders its country owns.
    pub fn pick(&self, ray: &Ray) -> Option<PickHit> {
        let (region, distance) = self
            .regions
            .iter()
            .enumerate()
            .filter_map(|(i, r)| {
                nearest_triangle_hit(ray, &r.solid.positions, &r.solid.indices).map(|t| (i, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let country = self.regions[region].country.clone();
        let point = ray.at(distance);
        Some(PickHit {
            region,
            borders: self.borders_for_country(&country),
            country,
            distance,
            point,
            coordinate: globe_geo::unproject(point.as_dvec3()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec3;
    use globe_geo::{GeoCoordinate, Ring, project};

    use super::*;

    fn square(lon: f64, lat: f64, size: f64) -> Ring {
        Ring::from_pairs([
            [lon, lat],
            [lon + size, lat],
            [lon + size, lat + size],
            [lon, lat + size],
            [lon, lat],
        ])
    }

    fn enclave() -> Ring {
        square(4.0, 4.0, 2.0)
    }

    fn dataset() -> Vec<Feature> {
        vec![
            Feature::from_polygons("A", [vec![square(0.0, 0.0, 10.0), enclave()]]),
            Feature::from_polygons("B", [vec![square(20.0, 0.0, 10.0), enclave().reversed()]]),
            Feature::from_polygons("C", [vec![square(40.0, 0.0, 10.0)]]),
        ]
    }

    fn globe() -> Globe {
        let mut globe = Globe::new(GlobeParams::default()).unwrap();
        globe.ingest(dataset()).unwrap();
        globe
    }

    #[derive(Clone)]
    struct FailingTriangulator;

    impl Triangulator for FailingTriangulator {
        fn triangulate(&self, _flat: &[f64]) -> Result<Vec<usize>, MeshError> {
            Err(MeshError::TriangulationUnavailable("offline".into()))
        }
    }

    /// Overflows once switched on, like a ring too large for `u32` indices.
    #[derive(Clone, Default)]
    struct OverflowSwitch(Rc<Cell<bool>>);

    impl Triangulator for OverflowSwitch {
        fn triangulate(&self, flat: &[f64]) -> Result<Vec<usize>, MeshError> {
            if self.0.get() {
                Err(MeshError::IndexOverflow {
                    points: flat.len() / 2,
                })
            } else {
                EarcutTriangulator.triangulate(flat)
            }
        }
    }

    #[test]
    fn test_new_globe_is_empty_and_stable() {
        let globe = Globe::new(GlobeParams::default()).unwrap();
        assert_eq!(globe.state(), BuildState::Stable);
        assert!(globe.regions().is_empty());
        assert!(globe.border_index().is_empty());
        assert!(globe.shells().ocean.triangle_count() > 0);
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let params = GlobeParams {
            radius: -1.0,
            ..Default::default()
        };
        assert!(Globe::new(params).is_err());
    }

    #[test]
    fn test_ingest_report() {
        let mut globe = Globe::new(GlobeParams::default()).unwrap();
        let report = globe.ingest(dataset()).unwrap();
        assert_eq!(report.features, 3);
        assert_eq!(report.outer_rings, 3);
        assert_eq!(report.hole_rings, 2);
        assert_eq!(report.empty_meshes, 0);
        assert_eq!(report.keys, 1);
        assert_eq!(report.classification.shared_groups, 1);
        assert_eq!(globe.regions().len(), 5);
        assert_eq!(globe.last_report(), &report);
    }

    #[test]
    fn test_outer_rings_carry_external_borders() {
        let globe = globe();
        for region in globe.regions() {
            assert_eq!(region.role.is_outer(), region.external_border.is_some());
            assert_eq!(region.role.is_outer(), region.internal_border.is_none());
        }
    }

    #[test]
    fn test_border_offsets() {
        let globe = globe();
        let external = globe.regions()[0].external_border.as_ref().unwrap();
        assert!((external.points[0].length() - 3.5).abs() < 1e-4);
        let id = globe.regions()[1].internal_border.unwrap();
        let internal = globe.border_index().get(id).unwrap().line();
        assert!((internal.points[0].length() - 3.45).abs() < 1e-4);
    }

    #[test]
    fn test_enclave_shared_by_both_countries() {
        let globe = globe();
        let a = globe.borders_for_country("A");
        let b = globe.borders_for_country("B");
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(globe.is_shared(a[0]), Some(true));
        assert_eq!(globe.is_shared(b[0]), Some(true));
        assert!(globe.borders_for_country("C").is_empty());
        assert_eq!(globe.visible_borders(BorderVisibility::SharedOnly).len(), 2);
    }

    #[test]
    fn test_invalid_param_keeps_previous_build() {
        let mut globe = globe();
        let before = globe.signature();
        let err = globe.set_extrusion_height(-0.5).unwrap_err();
        assert!(matches!(err, RebuildError::InvalidParameter { name: "extrusion_height", .. }));
        assert_eq!(globe.params().extrusion_height, 0.1);
        assert_eq!(globe.regions().len(), 5);
        assert_eq!(globe.signature(), before);
    }

    #[test]
    fn test_oversized_tessellation_keeps_previous_build() {
        let mut globe = globe();
        let before = globe.signature();
        let ocean = globe.shells().ocean.triangle_count();
        let err = globe.set_tessellation_segments(70_000).unwrap_err();
        assert!(matches!(
            err,
            RebuildError::InvalidParameter {
                name: "tessellation_segments",
                ..
            }
        ));
        assert_eq!(globe.params().tessellation_segments, 64);
        assert_eq!(globe.signature(), before);
        assert_eq!(globe.shells().ocean.triangle_count(), ocean);
    }

    #[test]
    fn test_aborted_rebuild_clears_derived_state() {
        let overflow = OverflowSwitch::default();
        let mut globe =
            Globe::with_triangulator(GlobeParams::default(), overflow.clone()).unwrap();
        globe.ingest(dataset()).unwrap();
        assert_eq!(globe.regions().len(), 5);
        assert!(!globe.border_index().is_empty());

        overflow.0.set(true);
        let err = globe.set_radius(5.0).unwrap_err();
        assert!(matches!(
            err,
            RebuildError::Mesh(MeshError::IndexOverflow { .. })
        ));
        assert_eq!(globe.state(), BuildState::Stable);
        assert!(globe.regions().is_empty());
        assert!(globe.border_index().is_empty());
        assert!(globe.signature().is_empty());
        assert_eq!(globe.last_report(), &BuildReport::default());
        assert_eq!(globe.features().len(), 3);
        let ocean = globe.shells().ocean.positions[0].length();
        assert!((ocean - 4.98).abs() < 1e-4);

        overflow.0.set(false);
        let report = globe.rebuild().unwrap();
        assert_eq!(report.classification.shared_groups, 1);
        assert_eq!(globe.regions().len(), 5);
    }

    #[test]
    fn test_rebuild_at_scales_geometry() {
        let mut globe = globe();
        globe.rebuild_at(5.0, 0.2).unwrap();
        let first = globe.regions()[0].solid.positions[0];
        assert!((first.length() - 5.0).abs() < 1e-4);
        assert!((globe.shells().ocean.positions[0].length() - 4.98).abs() < 1e-4);
    }

    #[test]
    fn test_tessellation_changes_shells_only() {
        let mut globe = globe();
        let before = globe.signature();
        let triangles = globe.last_report().triangles;
        globe.set_tessellation_segments(8).unwrap();
        assert_eq!(globe.signature(), before);
        assert_eq!(globe.last_report().triangles, triangles);
        assert!(globe.shells().ocean.triangle_count() < 64 * 64 * 2);
    }

    #[test]
    fn test_failing_triangulator_keeps_borders() {
        let mut globe =
            Globe::with_triangulator(GlobeParams::default(), FailingTriangulator).unwrap();
        let report = globe.ingest(dataset()).unwrap();
        assert_eq!(report.empty_meshes, 5);
        assert_eq!(report.triangles, 0);
        assert_eq!(report.classification.shared_groups, 1);
        assert!(globe.regions().iter().all(|r| r.solid.is_empty()));
    }

    #[test]
    fn test_malformed_ring_yields_empty_region() {
        let mut globe = Globe::new(GlobeParams::default()).unwrap();
        let sliver = Ring::from_pairs([[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        let report = globe
            .ingest(vec![Feature::from_polygons("S", [vec![sliver]])])
            .unwrap();
        assert_eq!(report.empty_meshes, 1);
        assert_eq!(globe.regions().len(), 1);
    }

    #[test]
    fn test_materials_survive_rebuild() {
        let mut globe = globe();
        globe.apply_preset(MaterialPreset::Metal);
        globe.set_material_property(MaterialProperty::Roughness(0.6));
        globe.set_radius(4.0).unwrap();
        let expected = MaterialPreset::Metal
            .material()
            .with(MaterialProperty::Roughness(0.6));
        assert_eq!(globe.material(), &expected);
        assert!(globe.regions().iter().all(|r| r.material == expected));
    }

    #[test]
    fn test_region_override_reset_by_rebuild() {
        let mut globe = globe();
        globe.region_mut(0).unwrap().material.set(MaterialProperty::Metalness(1.0));
        assert_eq!(globe.regions()[0].material.metalness, 1.0);
        globe.rebuild().unwrap();
        assert_eq!(globe.regions()[0].material.metalness, 0.0);
    }

    #[test]
    fn test_pick_hits_region_from_outside() {
        let globe = globe();
        let target = project(GeoCoordinate::new(25.0, 5.0), 3.4).as_vec3();
        let ray = Ray::towards(target * 3.0, Vec3::ZERO);
        let hit = globe.pick(&ray).unwrap();
        assert_eq!(hit.country, "B");
        assert!((hit.point.length() - 3.5).abs() < 0.05);
        assert!((hit.coordinate.lon - 25.0).abs() < 0.5);
        assert_eq!(hit.borders, globe.borders_for_country("B"));
    }

    #[test]
    fn test_pick_misses_open_ocean() {
        let globe = globe();
        let target = project(GeoCoordinate::new(-120.0, -40.0), 3.4).as_vec3();
        assert_eq!(globe.pick(&Ray::towards(target * 3.0, Vec3::ZERO)), None);
    }
}
