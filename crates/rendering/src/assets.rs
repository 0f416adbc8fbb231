//! Startup asset loading and the loading → running transition.
//!
//! `load_island_assets` queues every texture and the environment cubemaps on
//! the asset server. `poll_island_assets` then watches their load states each
//! frame: once everything is loaded the app enters [`IslandState::Running`];
//! the first failure is reported and the app exits with an error.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use std::fmt;

use crate::config::{ENV_DIFFUSE_PATH, ENV_SPECULAR_PATH};
use crate::IslandState;

// ---------------------------------------------------------------------------
// Texture slots
// ---------------------------------------------------------------------------

/// Surface textures used by the island scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Dirt,
    Dirt2,
    Grass,
    Sand,
    Water,
    Stone,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::Dirt,
        TextureSlot::Dirt2,
        TextureSlot::Grass,
        TextureSlot::Sand,
        TextureSlot::Water,
        TextureSlot::Stone,
    ];

    pub const fn index(self) -> usize {
        match self {
            TextureSlot::Dirt => 0,
            TextureSlot::Dirt2 => 1,
            TextureSlot::Grass => 2,
            TextureSlot::Sand => 3,
            TextureSlot::Water => 4,
            TextureSlot::Stone => 5,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            TextureSlot::Dirt => "textures/dirt.png",
            TextureSlot::Dirt2 => "textures/dirt2.jpg",
            TextureSlot::Grass => "textures/grass.jpg",
            TextureSlot::Sand => "textures/sand.jpg",
            TextureSlot::Water => "textures/water.jpg",
            TextureSlot::Stone => "textures/stone.png",
        }
    }

    /// Water tiles across the sea disc and drives roughness/metalness, so it
    /// repeats and is sampled as linear data rather than colour.
    fn is_data_texture(self) -> bool {
        matches!(self, TextureSlot::Water)
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Handles to everything the scene needs before it can be assembled.
#[derive(Resource, Debug, Clone, Default)]
pub struct IslandAssets {
    pub env_diffuse: Handle<Image>,
    pub env_specular: Handle<Image>,
    textures: [Handle<Image>; 6],
}

impl IslandAssets {
    pub fn texture(&self, slot: TextureSlot) -> Handle<Image> {
        self.textures[slot.index()].clone()
    }

    /// Every handle paired with the path it was loaded from.
    pub fn tracked(&self) -> impl Iterator<Item = (&'static str, UntypedAssetId)> + '_ {
        [
            (ENV_DIFFUSE_PATH, self.env_diffuse.id().untyped()),
            (ENV_SPECULAR_PATH, self.env_specular.id().untyped()),
        ]
        .into_iter()
        .chain(
            TextureSlot::ALL
                .into_iter()
                .map(move |slot| (slot.path(), self.textures[slot.index()].id().untyped())),
        )
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that stop the island scene from being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IslandAssetError {
    /// The asset itself could not be read or decoded.
    LoadFailed { path: &'static str, reason: String },
    /// The asset server has no record of the handle.
    Untracked { path: &'static str },
}

impl fmt::Display for IslandAssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IslandAssetError::LoadFailed { path, reason } => {
                write!(f, "failed to load '{path}': {reason}")
            }
            IslandAssetError::Untracked { path } => {
                write!(f, "asset '{path}' is not tracked by the asset server")
            }
        }
    }
}

impl std::error::Error for IslandAssetError {}

/// Aggregate readiness of a set of asset loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Ready,
    Failed(IslandAssetError),
}

/// Fold per-asset states into one readiness value. The first failure wins.
pub fn readiness<'a>(
    states: impl IntoIterator<Item = (&'static str, Option<&'a LoadState>)>,
) -> Readiness {
    let mut pending = false;
    for (path, state) in states {
        match state {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed(err)) => {
                return Readiness::Failed(IslandAssetError::LoadFailed {
                    path,
                    reason: err.to_string(),
                });
            }
            Some(LoadState::NotLoaded) | Some(LoadState::Loading) => pending = true,
            None => return Readiness::Failed(IslandAssetError::Untracked { path }),
        }
    }
    if pending {
        Readiness::Pending
    } else {
        Readiness::Ready
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Startup system: queue the environment map and all surface textures.
pub fn load_island_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let env_diffuse = asset_server.load(ENV_DIFFUSE_PATH);
    let env_specular = asset_server.load(ENV_SPECULAR_PATH);

    let textures = TextureSlot::ALL.map(|slot| {
        if slot.is_data_texture() {
            asset_server.load_with_settings(slot.path(), |settings: &mut ImageLoaderSettings| {
                settings.is_srgb = false;
                settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                    address_mode_u: ImageAddressMode::Repeat,
                    address_mode_v: ImageAddressMode::Repeat,
                    ..default()
                });
            })
        } else {
            asset_server.load(slot.path())
        }
    });

    info!("Loading island assets ({} textures)", textures.len());
    commands.insert_resource(IslandAssets {
        env_diffuse,
        env_specular,
        textures,
    });
}

/// While loading: advance to `Running` once everything is in, or exit on failure.
pub fn poll_island_assets(
    assets: Res<IslandAssets>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<IslandState>>,
    mut exit: EventWriter<AppExit>,
) {
    let states: Vec<(&'static str, Option<LoadState>)> = assets
        .tracked()
        .map(|(path, id)| (path, asset_server.get_load_state(id)))
        .collect();

    match readiness(states.iter().map(|(path, state)| (*path, state.as_ref()))) {
        Readiness::Pending => {}
        Readiness::Ready => {
            info!("Island assets loaded");
            next_state.set(IslandState::Running);
        }
        Readiness::Failed(err) => {
            error!("Island startup aborted: {err}");
            exit.send(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::io::AssetReaderError;
    use bevy::asset::AssetLoadError;

    #[test]
    fn test_slot_indices_unique_and_ordered() {
        for (i, slot) in TextureSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_only_water_is_data_texture() {
        let data: Vec<TextureSlot> = TextureSlot::ALL
            .into_iter()
            .filter(|s| s.is_data_texture())
            .collect();
        assert_eq!(data, vec![TextureSlot::Water]);
    }

    #[test]
    fn test_readiness_all_loaded() {
        let loaded = LoadState::Loaded;
        let states = [("a", Some(&loaded)), ("b", Some(&loaded))];
        assert_eq!(readiness(states), Readiness::Ready);
    }

    #[test]
    fn test_readiness_pending_while_loading() {
        let loaded = LoadState::Loaded;
        let loading = LoadState::Loading;
        let states = [("a", Some(&loaded)), ("b", Some(&loading))];
        assert_eq!(readiness(states), Readiness::Pending);
    }

    #[test]
    fn test_readiness_untracked_fails() {
        let loading = LoadState::Loading;
        let states = [("a", Some(&loading)), ("missing.png", None)];
        assert_eq!(
            readiness(states),
            Readiness::Failed(IslandAssetError::Untracked {
                path: "missing.png"
            })
        );
    }

    #[test]
    fn test_readiness_failed_load_names_asset() {
        let loaded = LoadState::Loaded;
        let failed = LoadState::Failed(
            AssetLoadError::AssetReaderError(AssetReaderError::NotFound(
                "textures/grass.jpg".into(),
            ))
            .into(),
        );
        let loading = LoadState::Loading;
        let states = [
            ("textures/dirt.png", Some(&loaded)),
            ("textures/grass.jpg", Some(&failed)),
            ("textures/sand.jpg", Some(&loading)),
        ];
        match readiness(states) {
            Readiness::Failed(IslandAssetError::LoadFailed { path, reason }) => {
                assert_eq!(path, "textures/grass.jpg");
                assert!(!reason.is_empty());
            }
            other => panic!("expected a load failure, got {other:?}"),
        }
    }

    #[test]
    fn test_readiness_empty_is_ready() {
        assert_eq!(readiness(std::iter::empty()), Readiness::Ready);
    }

    #[test]
    fn test_error_display_names_path() {
        let err = IslandAssetError::LoadFailed {
            path: "textures/sand.jpg",
            reason: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load 'textures/sand.jpg': not found");
    }
}
