use voxmesh_geom::Vec3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Outward direction of a cube face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// -Z
    North = 0,
    /// +Z
    South = 1,
    /// +X
    West = 2,
    /// -X
    East = 3,
    /// +Y
    Up = 4,
    /// -Y
    Down = 5,
}

impl Face {
    /// Emission order within one cell.
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::South,
        Face::West,
        Face::East,
        Face::Up,
        Face::Down,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(i: usize) -> Option<Face> {
        match i {
            0 => Some(Face::North),
            1 => Some(Face::South),
            2 => Some(Face::West),
            3 => Some(Face::East),
            4 => Some(Face::Up),
            5 => Some(Face::Down),
            _ => None,
        }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Face::West | Face::East => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::North | Face::South => Axis::Z,
        }
    }

    /// True when the normal points along the positive axis.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Face::South | Face::West | Face::Up)
    }

    #[inline]
    pub const fn opposite(self) -> Face {
        match self {
            Face::North => Face::South,
            Face::South => Face::North,
            Face::West => Face::East,
            Face::East => Face::West,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Integer grid step `(dx, dy, dz)` to the neighbour across this face.
    #[inline]
    pub const fn delta(self) -> (i32, i32, i32) {
        let s = if self.is_positive() { 1 } else { -1 };
        match self.axis() {
            Axis::X => (s, 0, 0),
            Axis::Y => (0, s, 0),
            Axis::Z => (0, 0, s),
        }
    }

    #[inline]
    pub const fn normal_array(self) -> [f32; 3] {
        let (dx, dy, dz) = self.delta();
        [dx as f32, dy as f32, dz as f32]
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from_array(self.normal_array())
    }

    /// Texture axes as `(s_axis, s_flipped, t_axis, t_flipped)`.
    ///
    /// Side faces run `s` toward the viewer's right when looking at the face from
    /// outside and `t` downward (texture rows start at the top). Top and bottom
    /// faces use `x`/`z`, with `z` mirrored underneath.
    const fn texture_axes(self) -> (usize, bool, usize, bool) {
        match self.axis() {
            Axis::Y => (Axis::X as usize, false, Axis::Z as usize, !self.is_positive()),
            Axis::X => (Axis::Z as usize, self.is_positive(), Axis::Y as usize, true),
            Axis::Z => (Axis::X as usize, !self.is_positive(), Axis::Y as usize, true),
        }
    }

    /// Unit-cube quad for this face derived from its axis and sign.
    ///
    /// With `n` the face axis, `u = n+1` and `v = n+2` (mod 3) are the in-plane
    /// axes, so `e_u × e_v = e_n`. Positive faces walk `(0,0) (1,0) (1,1) (0,1)`
    /// in `(u, v)`, negative faces walk the reverse; either way the corners run
    /// counter-clockwise seen from outside.
    pub const fn quad(self) -> FaceQuad {
        let n = self.axis() as usize;
        let u = (n + 1) % 3;
        let v = (n + 2) % 3;
        let positive = self.is_positive();
        let plane = positive as u8;
        let walk: [(u8, u8); 4] = if positive {
            [(0, 0), (1, 0), (1, 1), (0, 1)]
        } else {
            [(0, 0), (0, 1), (1, 1), (1, 0)]
        };
        let (s_axis, s_flip, t_axis, t_flip) = self.texture_axes();

        let mut corners = [[0u8; 3]; 4];
        let mut tex = [(false, false); 4];
        let mut i = 0;
        while i < 4 {
            corners[i][n] = plane;
            corners[i][u] = walk[i].0;
            corners[i][v] = walk[i].1;
            tex[i] = (
                (corners[i][s_axis] == 1) != s_flip,
                (corners[i][t_axis] == 1) != t_flip,
            );
            i += 1;
        }
        FaceQuad { corners, tex }
    }
}

/// Four corner offsets in `{0,1}³` plus, per corner, which texture corner it
/// takes: `(s_hi, t_hi)` selects `width`/`x` and `height`/`y` of a region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceQuad {
    pub corners: [[u8; 3]; 4],
    pub tex: [(bool, bool); 4],
}

impl FaceQuad {
    #[inline]
    pub fn offset(&self, corner: usize) -> Vec3 {
        let [x, y, z] = self.corners[corner];
        Vec3::new(x as f32, y as f32, z as f32)
    }
}

/// Corner order of the two triangles of a quad.
pub const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Quads for every face, indexed by [`Face::index`].
pub const FACE_QUADS: [FaceQuad; 6] = [
    Face::North.quad(),
    Face::South.quad(),
    Face::West.quad(),
    Face::East.quad(),
    Face::Up.quad(),
    Face::Down.quad(),
];
