//! Scene assembly: turns a generated [`Island`] into an owned list of mesh
//! descriptors, then spawns one entity per descriptor once assets are ready.

use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use terrain::{Island, MeshData, Tier};

use crate::assets::{IslandAssets, TextureSlot};
use crate::camera::IslandCamera;
use crate::config::*;

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// One normal per face.
    Flat,
    Smooth,
}

/// Which material a descriptor is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSpec {
    Tile(TextureSlot),
    Sea,
    Rim,
    Floor,
    Cloud,
}

/// Everything needed to spawn one mesh of the island scene.
#[derive(Debug, Clone)]
pub struct MeshDescriptor {
    pub name: String,
    pub geometry: MeshData,
    pub shading: Shading,
    pub material: MaterialSpec,
    pub transform: Transform,
    pub cast_shadows: bool,
    pub receive_shadows: bool,
}

impl MeshDescriptor {
    pub fn build_mesh(&self) -> Mesh {
        match self.shading {
            Shading::Flat => self.geometry.clone().into_flat_shaded_mesh(),
            Shading::Smooth => self.geometry.clone().into_mesh(),
        }
    }
}

pub fn texture_for_tier(tier: Tier) -> TextureSlot {
    match tier {
        Tier::Stone => TextureSlot::Stone,
        Tier::Dirt => TextureSlot::Dirt,
        Tier::Grass => TextureSlot::Grass,
        Tier::Sand => TextureSlot::Sand,
        Tier::Dirt2 => TextureSlot::Dirt2,
    }
}

fn ring(radius: f32, height: f32, open_ended: bool) -> MeshData {
    let mut geo = MeshData::new();
    geo.add_cylinder(Vec3::ZERO, radius, radius, height, RING_SEGMENTS, open_ended);
    geo
}

fn ring_transform(y: f32) -> Transform {
    Transform::from_xyz(0.0, y, 0.0).with_rotation(Quat::from_rotation_y(RING_ROTATION))
}

/// Build the full list of scene meshes for `island`.
///
/// Order: tier buffers (in [`Tier::ALL`] order), sea, rim, floor, clouds.
/// Tier buffers with no tiles and an empty cloud layer are left out.
pub fn build_scene_descriptors(island: &Island) -> Vec<MeshDescriptor> {
    let mut out: Vec<MeshDescriptor> = island
        .tiers
        .iter()
        .filter(|(_, geo)| !geo.is_empty())
        .map(|(tier, geo)| MeshDescriptor {
            name: format!("{tier} tiles"),
            geometry: geo.clone(),
            shading: Shading::Flat,
            material: MaterialSpec::Tile(texture_for_tier(tier)),
            transform: Transform::IDENTITY,
            cast_shadows: true,
            receive_shadows: true,
        })
        .collect();

    out.push(MeshDescriptor {
        name: "sea".into(),
        geometry: ring(SEA_RADIUS, SEA_HEIGHT, false),
        shading: Shading::Smooth,
        material: MaterialSpec::Sea,
        transform: ring_transform(SEA_Y),
        cast_shadows: false,
        receive_shadows: true,
    });
    out.push(MeshDescriptor {
        name: "rim".into(),
        geometry: ring(RIM_RADIUS, RIM_HEIGHT, true),
        shading: Shading::Smooth,
        material: MaterialSpec::Rim,
        transform: ring_transform(RIM_Y),
        cast_shadows: false,
        receive_shadows: true,
    });
    out.push(MeshDescriptor {
        name: "floor".into(),
        geometry: ring(FLOOR_RADIUS, FLOOR_HEIGHT, false),
        shading: Shading::Smooth,
        material: MaterialSpec::Floor,
        transform: Transform::from_xyz(0.0, FLOOR_Y, 0.0),
        cast_shadows: false,
        receive_shadows: true,
    });

    if !island.clouds.mesh.is_empty() {
        out.push(MeshDescriptor {
            name: "clouds".into(),
            geometry: island.clouds.mesh.clone(),
            shading: Shading::Flat,
            material: MaterialSpec::Cloud,
            transform: Transform::IDENTITY,
            cast_shadows: false,
            receive_shadows: false,
        });
    }

    out
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

fn sea_tint() -> Color {
    let linear = Color::srgb_u8(0x55, 0xaa, 0xff).to_linear();
    Color::LinearRgba(LinearRgba::rgb(
        linear.red * SEA_TINT_BOOST,
        linear.green * SEA_TINT_BOOST,
        linear.blue * SEA_TINT_BOOST,
    ))
}

pub fn build_material(spec: MaterialSpec, assets: &IslandAssets) -> StandardMaterial {
    match spec {
        MaterialSpec::Tile(slot) => StandardMaterial {
            base_color_texture: Some(assets.texture(slot)),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        },
        MaterialSpec::Sea => StandardMaterial {
            base_color: sea_tint(),
            perceptual_roughness: 1.0,
            metallic: SEA_METALLIC,
            metallic_roughness_texture: Some(assets.texture(TextureSlot::Water)),
            specular_transmission: 1.0,
            thickness: SEA_THICKNESS,
            ior: SEA_IOR,
            ..default()
        },
        MaterialSpec::Rim => StandardMaterial {
            base_color_texture: Some(assets.texture(TextureSlot::Dirt)),
            perceptual_roughness: 1.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        },
        MaterialSpec::Floor => StandardMaterial {
            base_color_texture: Some(assets.texture(TextureSlot::Dirt2)),
            perceptual_roughness: 1.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        },
        MaterialSpec::Cloud => StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 1.0,
            ..default()
        },
    }
}

/// Image-based light attached to the scene camera.
pub fn environment_light(assets: &IslandAssets) -> EnvironmentMapLight {
    EnvironmentMapLight {
        diffuse_map: assets.env_diffuse.clone(),
        specular_map: assets.env_specular.clone(),
        intensity: ENV_MAP_BASE_INTENSITY * ENV_MAP_STRENGTH,
        ..default()
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Runs once on entering `Running`: spawn every descriptor and attach the
/// environment light to the camera.
pub fn spawn_island_scene(
    mut commands: Commands,
    island: Res<Island>,
    assets: Res<IslandAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cameras: Query<Entity, With<IslandCamera>>,
) {
    let descriptors = build_scene_descriptors(&island);
    let count = descriptors.len();

    for desc in descriptors {
        let mesh = meshes.add(desc.build_mesh());
        let material = materials.add(build_material(desc.material, &assets));
        let mut entity = commands.spawn((
            Name::new(desc.name),
            Mesh3d(mesh),
            MeshMaterial3d(material),
            desc.transform,
        ));
        if !desc.cast_shadows {
            entity.insert(NotShadowCaster);
        }
        if !desc.receive_shadows {
            entity.insert(NotShadowReceiver);
        }
    }

    for camera in &cameras {
        commands.entity(camera).insert(environment_light(&assets));
    }

    info!("Spawned island scene ({count} meshes)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain::{generate_island, IslandParams};

    fn descriptors(seed: u64) -> (Island, Vec<MeshDescriptor>) {
        let island = generate_island(IslandParams::from_seed(seed));
        let descs = build_scene_descriptors(&island);
        (island, descs)
    }

    #[test]
    fn test_one_descriptor_per_non_empty_tier() {
        let (island, descs) = descriptors(42);
        let tiles = descs
            .iter()
            .filter(|d| matches!(d.material, MaterialSpec::Tile(_)))
            .count();
        let non_empty = island.tiers.iter().filter(|(_, g)| !g.is_empty()).count();
        assert_eq!(tiles, non_empty);
    }

    #[test]
    fn test_sea_rim_floor_always_present() {
        let (_, descs) = descriptors(7);
        for spec in [MaterialSpec::Sea, MaterialSpec::Rim, MaterialSpec::Floor] {
            assert_eq!(descs.iter().filter(|d| d.material == spec).count(), 1);
        }
    }

    #[test]
    fn test_clouds_present_only_when_generated() {
        for seed in 0..32 {
            let (island, descs) = descriptors(seed);
            let has_clouds = descs.iter().any(|d| d.material == MaterialSpec::Cloud);
            assert_eq!(has_clouds, island.stats.clouds > 0);
        }
    }

    #[test]
    fn test_shadow_flags() {
        let (_, descs) = descriptors(42);
        for d in &descs {
            match d.material {
                MaterialSpec::Tile(_) => assert!(d.cast_shadows && d.receive_shadows),
                MaterialSpec::Sea | MaterialSpec::Rim | MaterialSpec::Floor => {
                    assert!(!d.cast_shadows && d.receive_shadows, "{}", d.name)
                }
                MaterialSpec::Cloud => assert!(!d.cast_shadows && !d.receive_shadows),
            }
        }
    }

    #[test]
    fn test_tiles_and_clouds_are_flat_shaded() {
        let (_, descs) = descriptors(3);
        for d in &descs {
            let expected = match d.material {
                MaterialSpec::Tile(_) | MaterialSpec::Cloud => Shading::Flat,
                _ => Shading::Smooth,
            };
            assert_eq!(d.shading, expected, "{}", d.name);
        }
    }

    #[test]
    fn test_tier_textures_match_tier() {
        assert_eq!(texture_for_tier(Tier::Stone), TextureSlot::Stone);
        assert_eq!(texture_for_tier(Tier::Dirt), TextureSlot::Dirt);
        assert_eq!(texture_for_tier(Tier::Grass), TextureSlot::Grass);
        assert_eq!(texture_for_tier(Tier::Sand), TextureSlot::Sand);
        assert_eq!(texture_for_tier(Tier::Dirt2), TextureSlot::Dirt2);
    }

    #[test]
    fn test_ring_placement() {
        let (_, descs) = descriptors(42);
        let sea = descs.iter().find(|d| d.material == MaterialSpec::Sea);
        let floor = descs.iter().find(|d| d.material == MaterialSpec::Floor);
        let (Some(sea), Some(floor)) = (sea, floor) else {
            panic!("sea and floor descriptors missing");
        };
        assert!((sea.transform.translation.y - SEA_Y).abs() < 1e-6);
        assert!((floor.transform.translation.y - FLOOR_Y).abs() < 1e-6);
        assert_eq!(floor.transform.rotation, Quat::IDENTITY);
        let Some((lo, hi)) = sea.geometry.bounds() else {
            panic!("sea geometry empty");
        };
        assert!((hi.y - lo.y - SEA_HEIGHT).abs() < 1e-4);
        assert!(hi.x <= SEA_RADIUS + 1e-4);
    }

    #[test]
    fn test_rim_is_open_and_wider_than_sea() {
        let (_, descs) = descriptors(42);
        let rim = descs.iter().find(|d| d.material == MaterialSpec::Rim);
        let sea = descs.iter().find(|d| d.material == MaterialSpec::Sea);
        let (Some(rim), Some(sea)) = (rim, sea) else {
            panic!("rim and sea descriptors missing");
        };
        assert!(rim.geometry.vertex_count() < sea.geometry.vertex_count());
        let (Some((_, rim_hi)), Some((_, sea_hi))) = (rim.geometry.bounds(), sea.geometry.bounds())
        else {
            panic!("ring geometry empty");
        };
        assert!(rim_hi.z > sea_hi.z);
    }

    #[test]
    fn test_environment_light_uses_tile_strength() {
        let assets = IslandAssets::default();
        let light = environment_light(&assets);
        assert!((light.intensity - ENV_MAP_BASE_INTENSITY * 0.135).abs() < 1e-3);
        assert_eq!(light.diffuse_map, assets.env_diffuse);
        assert_eq!(light.specular_map, assets.env_specular);
    }

    #[test]
    fn test_materials_bind_expected_textures() {
        let assets = IslandAssets::default();
        let sea = build_material(MaterialSpec::Sea, &assets);
        assert!(sea.metallic_roughness_texture.is_some());
        assert_eq!(sea.specular_transmission, 1.0);
        for spec in [MaterialSpec::Rim, MaterialSpec::Floor] {
            let m = build_material(spec, &assets);
            assert!(m.double_sided && m.cull_mode.is_none());
        }
        let cloud = build_material(MaterialSpec::Cloud, &assets);
        assert!(cloud.base_color_texture.is_none());
    }

    #[test]
    fn test_sea_tint_is_boosted() {
        let tint = sea_tint().to_linear();
        let base = Color::srgb_u8(0x55, 0xaa, 0xff).to_linear();
        assert!((tint.blue - base.blue * SEA_TINT_BOOST).abs() < 1e-5);
        assert!((tint.alpha - 1.0).abs() < 1e-6);
    }
}
