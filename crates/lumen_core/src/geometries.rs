//! Intersectable trait and composite geometry trees.

use crate::{Geometry, Intersection};
use lumen_math::{Aabb, Ray};

/// Trait for anything that can be queried with a ray.
pub trait Intersectable: Send + Sync {
    /// All intersections of `ray` with this object, in no particular order.
    fn intersect<'a>(&'a self, ray: &Ray) -> Vec<Intersection<'a>>;

    /// Bounds of this object. `None` means unbounded, so it is never culled.
    fn bounding_box(&self) -> Option<Aabb>;

    /// True if `bbox` proves that `ray` cannot reach this object.
    fn culls(&self, ray: &Ray) -> bool {
        match self.bounding_box() {
            Some(bbox) => bbox.is_bounded() && !bbox.intersects(ray),
            None => false,
        }
    }
}

impl Intersectable for Geometry {
    fn intersect<'a>(&'a self, ray: &Ray) -> Vec<Intersection<'a>> {
        self.find_intersections(ray)
            .into_iter()
            .map(|point| Intersection::new(self, point))
            .collect()
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Geometry::bounding_box(self)
    }
}

/// A child of a composite: either a leaf geometry or a nested composite.
#[derive(Debug, Clone)]
pub enum Node {
    Geometry(Geometry),
    Composite(Geometries),
}

impl From<Geometry> for Node {
    fn from(geometry: Geometry) -> Self {
        Node::Geometry(geometry)
    }
}

impl From<Geometries> for Node {
    fn from(geometries: Geometries) -> Self {
        Node::Composite(geometries)
    }
}

impl Intersectable for Node {
    fn intersect<'a>(&'a self, ray: &Ray) -> Vec<Intersection<'a>> {
        match self {
            Node::Geometry(g) => g.intersect(ray),
            Node::Composite(c) => c.intersect(ray),
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Node::Geometry(g) => g.bounding_box(),
            Node::Composite(c) => c.bounding_box(),
        }
    }
}

/// An ordered collection of geometries and nested composites.
///
/// The bounding box is kept up to date as children are added. A composite
/// holding any unbounded child is itself unbounded, and one holding nothing
/// bounded reports [`Aabb::EMPTY`], which disables culling rather than
/// hiding its (empty) contents.
#[derive(Debug, Clone)]
pub struct Geometries {
    children: Vec<Node>,
    bbox: Option<Aabb>,
}

impl Geometries {
    /// Create a new empty composite.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            bbox: Some(Aabb::EMPTY),
        }
    }

    /// Build a composite from existing children.
    pub fn from_nodes(children: Vec<Node>) -> Self {
        let mut geometries = Self {
            children,
            bbox: None,
        };
        geometries.set_bounding_box();
        geometries
    }

    /// Add a child and grow the bounding box.
    pub fn add(&mut self, child: impl Into<Node>) {
        let child = child.into();
        self.bbox = match (self.bbox, child.bounding_box()) {
            (Some(acc), Some(b)) => Aabb::union([&acc, &b]),
            _ => None,
        };
        self.children.push(child);
    }

    /// Add several children at once.
    pub fn extend<I, N>(&mut self, children: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for child in children {
            self.add(child);
        }
    }

    /// Recompute the bounding box from the children.
    pub fn set_bounding_box(&mut self) {
        let boxes: Option<Vec<Aabb>> = self.children.iter().map(|c| c.bounding_box()).collect();
        self.bbox = match boxes {
            Some(boxes) => Some(Aabb::union(&boxes).unwrap_or(Aabb::EMPTY)),
            None => None,
        };
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Consume the tree and return every leaf geometry, depth first.
    pub fn into_leaves(self) -> Vec<Geometry> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(self, leaves: &mut Vec<Geometry>) {
        for child in self.children {
            match child {
                Node::Geometry(g) => leaves.push(g),
                Node::Composite(c) => c.collect_leaves(leaves),
            }
        }
    }

    /// Total number of leaf geometries in the tree.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                Node::Geometry(_) => 1,
                Node::Composite(g) => g.leaf_count(),
            })
            .sum()
    }

    /// Longest path from this composite down to a leaf geometry.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| match c {
                Node::Geometry(_) => 0,
                Node::Composite(g) => g.depth(),
            })
            .max()
            .unwrap_or(0)
    }
}

impl Default for Geometries {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Geometry> for Geometries {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        let mut geometries = Geometries::new();
        geometries.extend(iter);
        geometries
    }
}

impl Intersectable for Geometries {
    fn intersect<'a>(&'a self, ray: &Ray) -> Vec<Intersection<'a>> {
        if self.culls(ray) {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for child in &self.children {
            if child.culls(ray) {
                continue;
            }
            hits.extend(child.intersect(ray));
        }
        hits
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}
