/// Destination for emitted vertices. Implementations own the write cursor; the
/// mesher only ever appends.
pub trait VertexSink {
    fn emit(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]);
}

/// Interleaved vertex record.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

// Growable sink for callers that skip the counting pass.
impl VertexSink for Vec<Vertex> {
    #[inline]
    fn emit(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) {
        self.push(Vertex {
            position,
            normal,
            uv,
        });
    }
}

/// Discards geometry and only counts vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceCounter {
    pub vertices: usize,
}

impl FaceCounter {
    #[inline]
    pub fn faces(&self) -> usize {
        self.vertices / crate::VERTICES_PER_FACE
    }
}

impl VertexSink for FaceCounter {
    #[inline]
    fn emit(&mut self, _position: [f32; 3], _normal: [f32; 3], _uv: [f32; 2]) {
        self.vertices += 1;
    }
}
