//! Static line-grid geometry.

use bytemuck::{Pod, Zeroable};

/// Line endpoint in world space. The grid lies on `z = 0`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    pub pos: [f32; 3],
}

impl GridVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Inputs a mesh was built from. Two meshes with equal keys are identical.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshKey {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
}

/// Immutable set of line segments (vertex pairs) covering the viewport,
/// centered on the origin.
#[derive(Debug, Clone)]
pub struct GridMesh {
    key: MeshKey,
    vertices: Vec<GridVertex>,
}

impl GridMesh {
    /// Builds vertical lines at `x = -w/2 + i*s` for `i in 0..=floor(w/s)` and
    /// horizontal lines at `y = -h/2 + j*s` for `j in 0..=floor(h/s)`.
    ///
    /// Zero, negative or non-finite inputs produce an empty mesh, as does a
    /// spacing so fine that an axis would need more than
    /// [`MAX_LINES_PER_AXIS`] lines.
    pub fn build(width: f32, height: f32, spacing: f32) -> Self {
        let key = MeshKey { width, height, spacing };
        let empty = Self { key, vertices: Vec::new() };

        let valid = [width, height, spacing]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !valid {
            return empty;
        }

        let (Some(columns), Some(rows)) = (line_count(width, spacing), line_count(height, spacing))
        else {
            return empty;
        };

        let half_w = width * 0.5;
        let half_h = height * 0.5;

        let mut vertices = Vec::with_capacity(2 * (columns + rows));

        for i in 0..columns {
            let x = -half_w + i as f32 * spacing;
            vertices.push(GridVertex { pos: [x, -half_h, 0.0] });
            vertices.push(GridVertex { pos: [x, half_h, 0.0] });
        }
        for j in 0..rows {
            let y = -half_h + j as f32 * spacing;
            vertices.push(GridVertex { pos: [-half_w, y, 0.0] });
            vertices.push(GridVertex { pos: [half_w, y, 0.0] });
        }

        Self { key, vertices }
    }

    #[inline]
    pub fn key(&self) -> MeshKey {
        self.key
    }

    #[inline]
    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Upper bound on lines along one axis.
pub const MAX_LINES_PER_AXIS: usize = 1 << 16;

fn line_count(extent: f32, spacing: f32) -> Option<usize> {
    let steps = (extent / spacing).floor();
    (steps.is_finite() && steps < MAX_LINES_PER_AXIS as f32).then(|| steps as usize + 1)
}


#[cfg(test)]
mod mesh_proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn endpoint_count_matches_formula(
            w in 1u32..2000,
            h in 1u32..2000,
            s in 0.5f32..16.0,
        ) {
            let (w, h) = (w as f32, h as f32);
            let mesh = GridMesh::build(w, h, s);
            let expected = 2 * ((w / s).floor() as usize + 1) + 2 * ((h / s).floor() as usize + 1);
            prop_assert_eq!(mesh.vertices().len(), expected);
        }

        #[test]
        fn endpoints_stay_within_viewport(
            w in 1u32..1000,
            h in 1u32..1000,
            s in 0.5f32..16.0,
        ) {
            let (w, h) = (w as f32, h as f32);
            let mesh = GridMesh::build(w, h, s);
            let eps = 1e-3;
            for v in mesh.vertices() {
                prop_assert!(v.pos[0] >= -w / 2.0 - eps && v.pos[0] <= w / 2.0 + eps);
                prop_assert!(v.pos[1] >= -h / 2.0 - eps && v.pos[1] <= h / 2.0 + eps);
                prop_assert_eq!(v.pos[2], 0.0);
            }
        }

        #[test]
        fn lines_span_full_extent(w in 1u32..1000, h in 1u32..1000) {
            let (w, h) = (w as f32, h as f32);
            let mesh = GridMesh::build(w, h, 1.0);
            let v = mesh.vertices();
            // First vertical line sits on the left edge and spans the full height.
            prop_assert_eq!(v[0].pos, [-w / 2.0, -h / 2.0, 0.0]);
            prop_assert_eq!(v[1].pos, [-w / 2.0, h / 2.0, 0.0]);
        }
    }
}
