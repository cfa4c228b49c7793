//! Bounding Volume Hierarchy (BVH) construction for composite trees.
//!
//! The input tree is flattened to its leaves and rebuilt as a binary tree of
//! composites. Unbounded leaves cannot be placed in a box, so they stay at
//! the root next to the bounded subtree.

use crate::{Geometries, Geometry, Node};
use lumen_math::Aabb;

/// Maximum geometries per leaf composite before splitting.
const LEAF_MAX_SIZE: usize = 2;

impl Geometries {
    /// Rebuild this tree as a BVH.
    ///
    /// Median-split approach: sort leaves by box centroid on the longest axis
    /// of their combined bounds, split in half, recurse. Query results are
    /// the same as for the input tree.
    pub fn build_bvh(self) -> Geometries {
        let leaves = self.into_leaves();
        let total = leaves.len();

        let (bounded, unbounded): (Vec<Geometry>, Vec<Geometry>) = leaves
            .into_iter()
            .partition(|g| g.bounding_box().is_some());

        let root = build(bounded);
        if unbounded.is_empty() {
            log::debug!("BVH built over {} geometries, depth {}", total, root.depth());
            return root;
        }

        log::debug!(
            "BVH built over {} geometries, {} unbounded kept at root",
            total,
            unbounded.len()
        );

        let mut children: Vec<Node> = unbounded.into_iter().map(Node::from).collect();
        if !root.is_empty() {
            children.push(Node::Composite(root));
        }
        Geometries::from_nodes(children)
    }
}

fn build(mut geometries: Vec<Geometry>) -> Geometries {
    if geometries.len() <= LEAF_MAX_SIZE {
        return geometries.into_iter().collect();
    }

    let boxes: Vec<Aabb> = geometries.iter().filter_map(|g| g.bounding_box()).collect();
    let axis = Aabb::union(&boxes)
        .map(|b| b.longest_axis())
        .unwrap_or(0);

    // Sort geometries by centroid on chosen axis
    geometries.sort_by(|a, b| {
        let a_val = centroid_on(a, axis);
        let b_val = centroid_on(b, axis);
        a_val
            .partial_cmp(&b_val)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Split at midpoint
    let mid = geometries.len() / 2;
    let right = geometries.split_off(mid);
    let left = geometries;

    Geometries::from_nodes(vec![
        Node::Composite(build(left)),
        Node::Composite(build(right)),
    ])
}

fn centroid_on(geometry: &Geometry, axis: usize) -> f64 {
    geometry
        .bounding_box()
        .map(|b| b.axis_interval(axis).center())
        .unwrap_or(0.0)
}
