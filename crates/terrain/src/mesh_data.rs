//! `MeshData` helper for building and merging procedural geometry from
//! cylinders, cones and spheres.
//!
//! Primitives follow the conventions of the usual cylinder/sphere builders:
//! cylinders are centred on their origin along the Y axis with the first ring
//! vertex on +Z, and all faces wind counter-clockwise when seen from outside.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::{PI, TAU};

// ---------------------------------------------------------------------------
// MeshData
// ---------------------------------------------------------------------------

/// CPU-side indexed triangle list.
///
/// Merging appends vertices and re-bases the incoming indices, so merged
/// buffers keep no record of which part a triangle came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) normals: Vec<[f32; 3]>,
    pub(crate) uvs: Vec<[f32; 2]>,
    pub(crate) indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Append `other` to this buffer.
    pub fn merge(&mut self, other: MeshData) {
        let base = self.positions.len() as u32;
        self.positions.extend(other.positions);
        self.normals.extend(other.normals);
        self.uvs.extend(other.uvs);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    /// Merge a sequence of buffers into a new one.
    pub fn merged(parts: impl IntoIterator<Item = MeshData>) -> MeshData {
        let mut out = MeshData::new();
        for part in parts {
            out.merge(part);
        }
        out
    }

    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.positions {
            *p = (Vec3::from(*p) + offset).to_array();
        }
    }

    /// Rotate positions and normals about the world Y axis through the origin.
    pub fn rotate_y(&mut self, angle: f32) {
        let rot = Quat::from_rotation_y(angle);
        for p in &mut self.positions {
            *p = (rot * Vec3::from(*p)).to_array();
        }
        for n in &mut self.normals {
            *n = (rot * Vec3::from(*n)).to_array();
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty buffer.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
        .with_inserted_indices(Indices::U32(self.indices))
    }

    /// Like [`MeshData::into_mesh`], but every triangle gets its own vertices
    /// and a face normal, giving the faceted look.
    pub fn into_flat_shaded_mesh(self) -> Mesh {
        let mut mesh = self.into_mesh();
        mesh.duplicate_vertices();
        mesh.compute_flat_normals();
        mesh
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    /// Add a (possibly tapered) cylinder centred on `center`.
    ///
    /// A `radius_top` of zero produces a cone; the degenerate apex cap is
    /// skipped. `open_ended` omits both caps.
    pub fn add_cylinder(
        &mut self,
        center: Vec3,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
        open_ended: bool,
    ) {
        let segments = segments.max(3);
        let half_h = height * 0.5;
        let slope = if height > 0.0 {
            (radius_bottom - radius_top) / height
        } else {
            0.0
        };

        // Torso: two rings, top (row 0) then bottom (row 1).
        let base = self.positions.len() as u32;
        for (row, (radius, y)) in [(radius_top, half_h), (radius_bottom, -half_h)]
            .into_iter()
            .enumerate()
        {
            for i in 0..=segments {
                let u = i as f32 / segments as f32;
                let theta = u * TAU;
                let (sin, cos) = theta.sin_cos();
                self.positions
                    .push([center.x + radius * sin, center.y + y, center.z + radius * cos]);
                self.normals
                    .push(Vec3::new(sin, slope, cos).normalize_or_zero().to_array());
                self.uvs.push([u, row as f32]);
            }
        }
        let ring = segments + 1;
        for i in 0..segments {
            let a = base + i;
            let b = base + ring + i;
            let c = base + ring + i + 1;
            let d = base + i + 1;
            if radius_top > 0.0 {
                self.indices.extend_from_slice(&[a, b, d]);
            }
            if radius_bottom > 0.0 {
                self.indices.extend_from_slice(&[b, c, d]);
            }
        }

        if open_ended {
            return;
        }
        if radius_top > 0.0 {
            self.add_cap(center, radius_top, half_h, segments, true);
        }
        if radius_bottom > 0.0 {
            self.add_cap(center, radius_bottom, -half_h, segments, false);
        }
    }

    fn add_cap(&mut self, center: Vec3, radius: f32, y: f32, segments: u32, top: bool) {
        let sign = if top { 1.0 } else { -1.0 };
        let center_index = self.positions.len() as u32;
        self.positions.push([center.x, center.y + y, center.z]);
        self.normals.push([0.0, sign, 0.0]);
        self.uvs.push([0.5, 0.5]);

        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            self.positions
                .push([center.x + radius * sin, center.y + y, center.z + radius * cos]);
            self.normals.push([0.0, sign, 0.0]);
            self.uvs.push([cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5]);
        }

        for i in 0..segments {
            let v = center_index + 1 + i;
            if top {
                self.indices.extend_from_slice(&[v, v + 1, center_index]);
            } else {
                self.indices.extend_from_slice(&[v + 1, v, center_index]);
            }
        }
    }

    /// Add a hexagonal prism standing on the ground plane at `position`
    /// (x, z) and spanning `0..height` vertically.
    pub fn add_hex_prism(&mut self, position: Vec2, radius: f32, height: f32) {
        let center = Vec3::new(position.x, height * 0.5, position.y);
        self.add_cylinder(center, radius, radius, height, 6, false);
    }

    /// Add a pointed cone whose base has `radius`, centred on `center`.
    pub fn add_cone(&mut self, center: Vec3, radius: f32, height: f32, segments: u32) {
        self.add_cylinder(center, 0.0, radius, height, segments, false);
    }

    /// Add a UV sphere centred on `center`.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    ) {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let base = self.positions.len() as u32;

        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            let (sin_v, cos_v) = (v * PI).sin_cos();
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let (sin_u, cos_u) = (u * TAU).sin_cos();
                let dir = Vec3::new(-cos_u * sin_v, cos_v, sin_u * sin_v);
                self.positions.push((center + dir * radius).to_array());
                self.normals.push(dir.normalize_or_zero().to_array());
                self.uvs.push([u, 1.0 - v]);
            }
        }

        let row = ws + 1;
        for iy in 0..hs {
            for ix in 0..ws {
                let a = base + iy * row + ix + 1;
                let b = base + iy * row + ix;
                let c = base + (iy + 1) * row + ix;
                let d = base + (iy + 1) * row + ix + 1;
                if iy != 0 {
                    self.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    self.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
    }
}
