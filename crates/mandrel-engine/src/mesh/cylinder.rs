use std::f32::consts::TAU;

use glam::Vec3;

use super::data::{Face, MeshData, Vertex};

/// Parameters for [`generate_cylinder`].
///
/// `subdiv1` is the circumferential resolution (vertices per ring), `subdiv2`
/// the longitudinal resolution (number of rings). Callers must supply
/// `subdiv1 >= 3` and `subdiv2 >= 2`; smaller values yield a degenerate
/// cross-section or zero faces and are not rejected here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CylinderParams {
    /// Center of the cylinder.
    pub base: Vec3,
    /// Cylinder axis direction, assumed unit length and not parallel to +Y
    /// (the tangent frame is built from a fixed up vector).
    pub axis: Vec3,
    pub radius: f32,
    pub length: f32,
    /// Vertices per ring.
    pub subdiv1: u32,
    /// Number of rings along the axis.
    pub subdiv2: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            base: Vec3::ZERO,
            axis: Vec3::X,
            radius: 0.5,
            length: 3.0,
            subdiv1: 64,
            subdiv2: 512,
        }
    }
}

/// Generates a closed-profile, open-ended tessellated cylindrical surface.
///
/// Vertices are emitted ring by ring in row-major order (`i * subdiv1 + j`
/// for ring `i`, circumferential step `j`). Ring `i` sits at longitudinal
/// offset `(i / (subdiv2 - 1) - 0.5) * length` along the axis, so the offset
/// increases with `i` from `-length/2` to `+length/2`. Normals are purely
/// radial and unit length by construction.
///
/// Adjacent rings are stitched with two triangles per circumferential step,
/// wrapping `j + 1` modulo `subdiv1` to close the profile. No end caps are
/// generated.
pub fn generate_cylinder(params: CylinderParams) -> MeshData {
    let CylinderParams {
        base,
        axis,
        radius,
        length,
        subdiv1,
        subdiv2,
    } = params;

    // Tangent frame spanning the circular cross-section. Using a fixed up
    // vector keeps rings aligned across parameter changes; it degenerates
    // when `axis` is parallel to +Y (caller contract).
    let frame_x = Vec3::Y;
    let frame_y = axis.cross(frame_x);

    let mut vertices: Vec<Vertex> = Vec::with_capacity((subdiv1 * subdiv2) as usize);

    for i in 0..subdiv2 {
        let along = if subdiv2 > 1 {
            i as f32 / (subdiv2 - 1) as f32
        } else {
            0.0
        };
        let offset = (along - 0.5) * length;

        for j in 0..subdiv1 {
            let angle = TAU * j as f32 / subdiv1 as f32;
            let radial = angle.cos() * frame_x + angle.sin() * frame_y;

            vertices.push(Vertex {
                position: (base + offset * axis + radius * radial).to_array(),
                normal: radial.normalize().to_array(),
            });
        }
    }

    let ring_pairs = subdiv2.saturating_sub(1);
    let mut faces: Vec<Face> = Vec::with_capacity((2 * subdiv1 * ring_pairs) as usize);

    for i in 0..ring_pairs {
        let ring = i * subdiv1;
        let next = ring + subdiv1;

        for j in 0..subdiv1 {
            let j1 = (j + 1) % subdiv1;
            faces.push([ring + j, ring + j1, next + j]);
            faces.push([ring + j1, next + j, next + j1]);
        }
    }

    MeshData { vertices, faces }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn params(subdiv1: u32, subdiv2: u32) -> CylinderParams {
        CylinderParams {
            subdiv1,
            subdiv2,
            ..CylinderParams::default()
        }
    }

    fn norm(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_and_face_counts_match_subdivision() {
        for (s1, s2) in [(3, 2), (4, 2), (8, 5), (64, 512), (17, 9)] {
            let mesh = generate_cylinder(params(s1, s2));
            assert_eq!(mesh.vertex_count(), (s1 * s2) as usize, "subdiv {s1}x{s2}");
            assert_eq!(
                mesh.face_count(),
                (2 * s1 * (s2 - 1)) as usize,
                "subdiv {s1}x{s2}"
            );
            assert_eq!(mesh.element_count(), 2 * s1 * (s2 - 1) * 3);
        }
    }

    #[test]
    fn two_rings_yield_a_single_quad_strip() {
        let mesh = generate_cylinder(params(6, 2));
        assert_eq!(mesh.face_count(), 12); // 2 * subdiv1, no intermediate rings
        assert_eq!(mesh.vertex_count(), 12);
    }

    #[test]
    fn single_ring_yields_no_faces() {
        let mesh = generate_cylinder(params(8, 1));
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.vertex_count(), 8);
    }

    // ── normals ───────────────────────────────────────────────────────────

    #[test]
    fn normals_are_unit_length() {
        let mesh = generate_cylinder(params(16, 7));
        for vertex in &mesh.vertices {
            assert_relative_eq!(norm(vertex.normal), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn normals_are_radial_independent_of_ring() {
        let s1 = 8;
        let mesh = generate_cylinder(params(s1, 4));
        // Same circumferential step on different rings shares one normal.
        for j in 0..s1 as usize {
            let first = mesh.vertices[j].normal;
            for i in 1..4 {
                assert_eq!(mesh.vertices[i * s1 as usize + j].normal, first);
            }
        }
    }

    // ── topology ──────────────────────────────────────────────────────────

    #[test]
    fn all_indices_are_in_range() {
        let mesh = generate_cylinder(params(9, 6));
        mesh.validate().expect("generator emits in-range indices");
    }

    #[test]
    fn generator_is_pure() {
        let p = params(12, 5);
        assert_eq!(generate_cylinder(p), generate_cylinder(p));
    }

    // ── geometry scenario ─────────────────────────────────────────────────

    #[test]
    fn square_profile_two_ring_scenario() {
        let mesh = generate_cylinder(CylinderParams {
            base: Vec3::ZERO,
            axis: Vec3::X,
            radius: 1.0,
            length: 2.0,
            subdiv1: 4,
            subdiv2: 2,
        });

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 8);

        // Ring 0 sits at offset -length/2 = -1 along +X; with the frame
        // x = (0,1,0), y = axis × x = (0,0,1) the four vertices land at
        // angles 0, π/2, π, 3π/2 on the unit circle in the YZ plane.
        let expected = [
            [-1.0, 1.0, 0.0],
            [-1.0, 0.0, 1.0],
            [-1.0, -1.0, 0.0],
            [-1.0, 0.0, -1.0],
        ];
        for (j, want) in expected.iter().enumerate() {
            let got = mesh.vertices[j].position;
            for k in 0..3 {
                assert_relative_eq!(got[k], want[k], epsilon = 1e-5);
            }
        }

        // Ring 1 mirrors ring 0 at +1.
        for j in 0..4 {
            assert_relative_eq!(mesh.vertices[4 + j].position[0], 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn quad_strip_wraps_around_the_profile() {
        let s1 = 4;
        let mesh = generate_cylinder(params(s1, 2));
        // Last circumferential step's triangles wrap j+1 back to 0.
        let last = &mesh.faces[(2 * (s1 - 1)) as usize];
        assert_eq!(*last, [3, 0, 7]);
        let wrap = &mesh.faces[(2 * (s1 - 1) + 1) as usize];
        assert_eq!(*wrap, [0, 7, 4]);
    }
}
