use super::*;

#[test]
fn test_vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
}

// ============================================================================
// uv_sphere
// ============================================================================

#[test]
fn test_sphere_counts() {
    let mesh = uv_sphere(200.0, 64, 32);
    assert_eq!(mesh.vertices.len(), 65 * 33);
    // Pole rows contribute one triangle per segment, inner rows two
    assert_eq!(mesh.triangle_count(), 2 * 64 * (32 - 1));
}

#[test]
fn test_sphere_vertices_on_surface() {
    let mesh = uv_sphere(200.0, 16, 8);
    for vertex in &mesh.vertices {
        assert!((vertex.position.length() - 200.0).abs() < 1e-2);
        assert!((vertex.normal.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_sphere_indices_in_range() {
    let mesh = uv_sphere(1.0, 12, 6);
    let count = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < count));
    assert_eq!(mesh.indices.len() % 3, 0);
}

#[test]
fn test_sphere_bounds() {
    let bounds = uv_sphere(10.0, 32, 16).bounds();
    assert!((bounds.max.y - 10.0).abs() < 1e-4);
    assert!((bounds.min.y + 10.0).abs() < 1e-4);
    assert!(bounds.max.x <= 10.0 + 1e-4);
}

#[test]
fn test_sphere_clamps_segments() {
    let mesh = uv_sphere(1.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
}

// ============================================================================
// cuboid
// ============================================================================

#[test]
fn test_cuboid_counts() {
    let mesh = cuboid(4.0, 440.0, 6.0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
}

#[test]
fn test_cuboid_bounds() {
    let bounds = cuboid(4.0, 440.0, 6.0).bounds();
    assert_eq!(bounds.min, Vec3::new(-2.0, -220.0, -3.0));
    assert_eq!(bounds.max, Vec3::new(2.0, 220.0, 3.0));
}

#[test]
fn test_cuboid_winding_faces_outward() {
    let mesh = cuboid(1.0, 2.0, 3.0);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
        let face_normal = (b.position - a.position).cross(c.position - a.position).normalize();
        assert!((face_normal - a.normal).length() < 1e-5);
    }
}

#[test]
fn test_byte_views() {
    let mesh = cuboid(1.0, 1.0, 1.0);
    assert_eq!(mesh.vertex_bytes().len(), 24 * 32);
    assert_eq!(mesh.index_bytes().len(), 36 * 4);
}

#[test]
fn test_empty_mesh_bounds() {
    let mesh = MeshData { vertices: Vec::new(), indices: Vec::new() };
    assert_eq!(mesh.bounds(), AABB { min: Vec3::ZERO, max: Vec3::ZERO });
}
