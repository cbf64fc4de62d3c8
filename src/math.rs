//! Mathematical utilities for the direct stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 6x6 matrix for 2D member stiffness (two nodes, three DOFs each)
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for member forces/displacements
pub type Vec6 = SVector<f64, 6>;

/// Compute the local stiffness matrix for an axial-only truss member.
///
/// # Arguments
/// * `e` - Modulus of elasticity (MPa)
/// * `a` - Cross-sectional area (mm²)
/// * `length` - Member length (mm)
pub fn truss_local_stiffness(e: f64, a: f64, length: f64) -> Mat6 {
    let ea_l = e * a / length;

    let mut k = Mat6::zeros();
    k[(0, 0)] = ea_l;
    k[(0, 3)] = -ea_l;
    k[(3, 0)] = -ea_l;
    k[(3, 3)] = ea_l;
    k
}

/// Compute the local stiffness matrix for a 2D Euler-Bernoulli frame member.
///
/// DOF order is [ux_i, uy_i, rz_i, ux_j, uy_j, rz_j] in member-axis
/// coordinates.
///
/// # Arguments
/// * `e` - Modulus of elasticity (MPa)
/// * `a` - Cross-sectional area (mm²)
/// * `i` - Moment of inertia about the bending axis (mm⁴)
/// * `length` - Member length (mm)
pub fn frame_local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let ei_l3 = e * i / l3;
    let ei_l2 = e * i / l2;
    let ei_l = e * i / l;

    #[rustfmt::skip]
    let data = [
        // Row 0: axial at i
        ea_l,   0.0,          0.0,         -ea_l,  0.0,          0.0,
        // Row 1: shear at i
        0.0,    12.0*ei_l3,   6.0*ei_l2,   0.0,    -12.0*ei_l3,  6.0*ei_l2,
        // Row 2: moment at i
        0.0,    6.0*ei_l2,    4.0*ei_l,    0.0,    -6.0*ei_l2,   2.0*ei_l,
        // Row 3: axial at j
        -ea_l,  0.0,          0.0,         ea_l,   0.0,          0.0,
        // Row 4: shear at j
        0.0,    -12.0*ei_l3,  -6.0*ei_l2,  0.0,    12.0*ei_l3,   -6.0*ei_l2,
        // Row 5: moment at j
        0.0,    6.0*ei_l2,    2.0*ei_l,    0.0,    -6.0*ei_l2,   4.0*ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the transformation matrix from global to member-local
/// coordinates for a 2D member.
///
/// # Arguments
/// * `i_node` - Start node coordinates [X, Y]
/// * `j_node` - End node coordinates [X, Y]
pub fn member_transformation_matrix(i_node: &[f64; 2], j_node: &[f64; 2]) -> Mat6 {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];
    let length = (dx * dx + dy * dy).sqrt();

    let c = dx / length;
    let s = dy / length;

    let mut t = Mat6::zeros();
    for block in 0..2 {
        let offset = block * 3;
        t[(offset, offset)] = c;
        t[(offset, offset + 1)] = s;
        t[(offset + 1, offset)] = -s;
        t[(offset + 1, offset + 1)] = c;
        t[(offset + 2, offset + 2)] = 1.0;
    }

    t
}

/// Solve a linear system using LU decomposition.
///
/// Returns `None` when the matrix is singular.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}
