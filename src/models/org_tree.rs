//! Organization chart model and its copy-on-write mutation engine.
//!
//! A [`Forest`] is an immutable value. Every mutation returns a new forest that
//! rebuilds only the ancestor chain of the affected node; every other subtree is
//! shared with the input by reference count. Mutations addressed to an id that is
//! not present return the input unchanged.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use super::node_id::{IdSource, NodeId};

pub const NEW_NODE_NAME: &str = "New Position";
pub const NEW_NODE_POSITION: &str = "Title";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    id: NodeId,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    position: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_photo"
    )]
    photo: Option<String>,
    #[serde(default, skip_serializing_if = "Forest::is_empty")]
    children: Forest,
    /// Keys this crate does not model; written back untouched.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl OrgNode {
    pub fn new(id: NodeId, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            photo: None,
            children: Forest::new(),
            extra: Map::new(),
        }
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = normalize_photo(photo.into());
        self
    }

    pub fn with_children(mut self, children: Forest) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn children(&self) -> &Forest {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn field(&self, field: OrgField) -> &str {
        match field {
            OrgField::Name => &self.name,
            OrgField::Position => &self.position,
            OrgField::Photo => self.photo.as_deref().unwrap_or(""),
        }
    }

    fn patched(&self, patch: &NodePatch) -> Self {
        let mut node = self.clone();
        if let Some(name) = &patch.name {
            node.name = name.clone();
        }
        if let Some(position) = &patch.position {
            node.position = position.clone();
        }
        if let Some(photo) = &patch.photo {
            node.photo = normalize_photo(photo.clone());
        }
        node
    }
}

fn normalize_photo(photo: String) -> Option<String> {
    if photo.trim().is_empty() {
        None
    } else {
        Some(photo)
    }
}

/// Reads an explicit `null` the same as a missing key.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_photo<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(normalize_photo))
}

/// The text fields of a node that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgField {
    Name,
    Position,
    Photo,
}

impl OrgField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Position => "Position Title",
            Self::Photo => "Photo URL",
        }
    }
}

/// Partial field update. `None` leaves the field untouched; an empty `photo`
/// clears the photo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub photo: Option<String>,
}

impl NodePatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn position(value: impl Into<String>) -> Self {
        Self {
            position: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn photo(value: impl Into<String>) -> Self {
        Self {
            photo: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn for_field(field: OrgField, value: impl Into<String>) -> Self {
        match field {
            OrgField::Name => Self::name(value),
            OrgField::Position => Self::position(value),
            OrgField::Photo => Self::photo(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("node id must not be empty")]
    MissingId,
    #[error("duplicate node id `{0}`")]
    DuplicateId(NodeId),
    #[error("organization chart is deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Ordered sequence of root positions.
#[derive(Clone)]
pub struct Forest(Arc<[Arc<OrgNode>]>);

impl Forest {
    pub fn new() -> Self {
        Self(Arc::from(Vec::<Arc<OrgNode>>::new()))
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = OrgNode>) -> Self {
        Self(nodes.into_iter().map(Arc::new).collect::<Vec<_>>().into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of root positions.
    pub fn root_count(&self) -> usize {
        self.0.len()
    }

    pub fn roots(&self) -> impl Iterator<Item = &OrgNode> + '_ {
        self.0.iter().map(|node| node.as_ref())
    }

    pub fn root(&self, index: usize) -> Option<&OrgNode> {
        self.0.get(index).map(|node| node.as_ref())
    }

    /// Shared handle of the root at `index`; two forests hold the same subtree
    /// exactly when their handles are pointer-equal.
    pub fn root_handle(&self, index: usize) -> Option<&Arc<OrgNode>> {
        self.0.get(index)
    }

    pub fn ptr_eq(&self, other: &Forest) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Pre-order, depth-first walk in child order. Roots have depth 0.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.0.iter().rev().map(|node| (0, node.as_ref())).collect(),
        }
    }

    /// Total number of nodes across all roots and descendants.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels; 0 for an empty forest, 1 when only roots exist.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    pub fn find(&self, id: &NodeId) -> Option<&OrgNode> {
        self.iter().map(|(_, node)| node).find(|node| &node.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Ids in depth-first order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|(_, node)| node.id.clone()).collect()
    }

    pub fn validate(&self, max_depth: usize) -> Result<(), ForestError> {
        let mut seen = FxHashSet::default();
        for (depth, node) in self.iter() {
            if depth >= max_depth {
                return Err(ForestError::TooDeep { max_depth });
            }
            if node.id.as_str().is_empty() {
                return Err(ForestError::MissingId);
            }
            if !seen.insert(&node.id) {
                return Err(ForestError::DuplicateId(node.id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Forest {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0[..] == other.0[..]
    }
}

impl Eq for Forest {}

impl fmt::Debug for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.roots()).finish()
    }
}

impl FromIterator<OrgNode> for Forest {
    fn from_iter<I: IntoIterator<Item = OrgNode>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl Serialize for Forest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.roots())
    }
}

impl<'de> Deserialize<'de> for Forest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes = Option::<Vec<OrgNode>>::deserialize(deserializer)?;
        Ok(Self::from_nodes(nodes.unwrap_or_default()))
    }
}

pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a OrgNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.0.iter().rev().map(|child| (depth + 1, child.as_ref())));
        Some((depth, node))
    }
}

/// A fresh node with placeholder text, no photo and no children.
pub fn create_node(ids: &mut dyn IdSource) -> OrgNode {
    OrgNode::new(ids.next_id(), NEW_NODE_NAME, NEW_NODE_POSITION)
}

pub fn update(forest: &Forest, target: &NodeId, patch: &NodePatch) -> Forest {
    rewrite(forest, target, &mut |node| Some(node.patched(patch)))
        .unwrap_or_else(|| forest.clone())
}

/// Appends a fresh node as the last child of `parent`.
pub fn add_child(forest: &Forest, parent: &NodeId, ids: &mut dyn IdSource) -> Forest {
    rewrite(forest, parent, &mut |node| {
        let mut children = node.children.0.to_vec();
        children.push(Arc::new(create_node(&mut *ids)));
        Some(OrgNode {
            children: Forest(children.into()),
            ..node.clone()
        })
    })
    .unwrap_or_else(|| forest.clone())
}

/// Appends a fresh root position.
pub fn append_root(forest: &Forest, ids: &mut dyn IdSource) -> Forest {
    let mut roots = forest.0.to_vec();
    roots.push(Arc::new(create_node(ids)));
    Forest(roots.into())
}

/// Removes `target` together with its whole subtree.
pub fn remove(forest: &Forest, target: &NodeId) -> Forest {
    rewrite(forest, target, &mut |_| None).unwrap_or_else(|| forest.clone())
}

/// Depth-first search for `target`; on a hit the node is replaced by `edit`'s
/// result (or dropped on `None`) and the ancestor chain is rebuilt. Siblings and
/// untouched subtrees keep their `Arc`s. Returns `None` when `target` is absent.
fn rewrite(
    forest: &Forest,
    target: &NodeId,
    edit: &mut dyn FnMut(&OrgNode) -> Option<OrgNode>,
) -> Option<Forest> {
    for (index, node) in forest.0.iter().enumerate() {
        if &node.id == target {
            let mut nodes = Vec::with_capacity(forest.0.len());
            nodes.extend(forest.0[..index].iter().cloned());
            if let Some(replacement) = edit(node) {
                nodes.push(Arc::new(replacement));
            }
            nodes.extend(forest.0[index + 1..].iter().cloned());
            return Some(Forest(nodes.into()));
        }

        if let Some(children) = rewrite(&node.children, target, edit) {
            let mut nodes = forest.0.to_vec();
            nodes[index] = Arc::new(OrgNode {
                children,
                ..node.as_ref().clone()
            });
            return Some(Forest(nodes.into()));
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/models/org_tree.rs"]
mod tests;
