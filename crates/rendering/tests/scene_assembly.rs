//! Scene assembly and camera tests that need no GPU.
//!
//! Run: cargo test -p rendering --test scene_assembly

use bevy::prelude::*;

use rendering::camera::{damping_factor, step_toward, OrbitCamera, OrbitSettings};
use rendering::scene::{build_scene_descriptors, MaterialSpec, Shading};
use terrain::{generate_island, IslandParams, Tier};

#[test]
fn test_descriptor_count_for_many_seeds() {
    for seed in 0..16 {
        let island = generate_island(IslandParams::from_seed(seed));
        let descs = build_scene_descriptors(&island);
        let tiers = island.tiers.iter().filter(|(_, g)| !g.is_empty()).count();
        let clouds = usize::from(island.stats.clouds > 0);
        // Sea, rim and floor are unconditional.
        assert_eq!(descs.len(), tiers + 3 + clouds);
    }
}

#[test]
fn test_tile_geometry_passes_through_unchanged() {
    let island = generate_island(IslandParams::default());
    let descs = build_scene_descriptors(&island);
    for d in descs.iter().filter(|d| matches!(d.material, MaterialSpec::Tile(_))) {
        let total: usize = Tier::ALL
            .iter()
            .map(|t| island.tiers.get(*t))
            .filter(|g| **g == d.geometry)
            .count();
        assert!(total >= 1, "{} geometry not found among tier buffers", d.name);
        assert_eq!(d.transform, Transform::IDENTITY);
    }
}

#[test]
fn test_flat_shaded_mesh_has_one_vertex_per_corner() {
    let island = generate_island(IslandParams::from_seed(4));
    let descs = build_scene_descriptors(&island);
    let Some(tile) = descs.iter().find(|d| d.shading == Shading::Flat) else {
        panic!("no flat shaded descriptor");
    };
    let mesh = tile.build_mesh();
    assert_eq!(mesh.count_vertices(), tile.geometry.index_count());
}

#[test]
fn test_damped_camera_settles_on_target() {
    let settings = OrbitSettings::default();
    let mut orbit = OrbitCamera::default();
    let target = OrbitCamera {
        focus: Vec3::new(3.0, 0.0, -2.0),
        ..orbit
    };
    let mut prev_gap = (target.focus - orbit.focus).length();
    for _ in 0..300 {
        step_toward(&mut orbit, &target, damping_factor(settings.damping, 1.0 / 60.0));
        let gap = (target.focus - orbit.focus).length();
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3);
}
