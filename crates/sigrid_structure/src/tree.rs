//! Arena-backed signature trees with a deep-copy contract.
//!
//! All nodes of one artifact live in a single growable slot table addressed
//! by generational [`NodeId`]s. Parent and child links are indices, so a
//! subtree can be deep-copied into a new parent without ownership cycles.

// Allow usize to u32 casts - slot counts stay far below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use sigrid_foundation::{Error, NodeId, NodeKind, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::documentation::Documentation;
use crate::node::{ListDirection, NodePayload, SignatureNode, accepts_child};

/// Delimiters used when building identifier paths of documented elements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delimiters {
    /// Separates path segments (default `.`).
    pub path_delimiter: String,
    /// Separates namespaces from local names (default `#`).
    pub namespace_delimiter: String,
    /// Separates an identifier from its data type (default `:`).
    pub type_delimiter: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            path_delimiter: ".".to_string(),
            namespace_delimiter: "#".to_string(),
            type_delimiter: ":".to_string(),
        }
    }
}

/// One slot of the arena.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Slot {
    /// Bumped whenever the slot is freed, so stale ids are detected.
    generation: u32,
    /// The stored node; `None` while the slot is on the free list.
    node: Option<SignatureNode>,
}

/// The signature tree of one interface artifact.
///
/// Every non-root node has exactly one parent, set when the node is attached
/// and never mutated afterwards. Copying a subtree always re-parents the
/// copied children to the copied ancestor, never to the original parent.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignatureTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: Option<NodeId>,
    live: usize,
}

impl SignatureTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root artifact node, if one was inserted.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Inserts the root artifact node.
    ///
    /// # Errors
    ///
    /// Fails with a kind mismatch if `node` is not an artifact, or with an
    /// internal error if the tree already has a root.
    pub fn insert_artifact(&mut self, node: SignatureNode) -> Result<NodeId> {
        if node.kind() != NodeKind::Artifact {
            return Err(Error::kind_mismatch(NodeKind::Artifact, node.kind()));
        }
        if self.root.is_some() {
            return Err(Error::internal("tree already has a root artifact"));
        }

        let id = self.alloc(node, None);
        self.root = Some(id);
        Ok(id)
    }

    /// Attaches `node` as the last structural child of `parent`.
    ///
    /// The child collection is chosen by the node's kind (operations vs.
    /// inner interfaces under an interface, and so on).
    ///
    /// # Errors
    ///
    /// Fails if `parent` is invalid or does not accept the node's kind.
    pub fn attach(&mut self, parent: NodeId, node: SignatureNode) -> Result<NodeId> {
        let parent_kind = self.get(parent)?.kind();
        let child_kind = node.kind();
        if !accepts_child(parent_kind, child_kind) {
            return Err(Error::kind_mismatch(parent_kind, child_kind));
        }

        let id = self.alloc(node, Some(parent));
        let parent_node = self
            .slots
            .get_mut(parent.index as usize)
            .and_then(|slot| slot.node.as_mut())
            .ok_or_else(|| Error::node_not_found(parent))?;

        match (parent_node.payload_mut(), child_kind) {
            (NodePayload::Artifact { interfaces }, NodeKind::Interface) => interfaces.push(id),
            (NodePayload::Interface { operations, .. }, NodeKind::Operation) => {
                operations.push(id);
            }
            (NodePayload::Interface { inner_interfaces, .. }, NodeKind::Interface) => {
                inner_interfaces.push(id);
            }
            (NodePayload::Operation { parameter_lists }, NodeKind::ParameterList) => {
                parameter_lists.push(id);
            }
            (NodePayload::ParameterList { parameters, .. }, NodeKind::Parameter) => {
                parameters.push(id);
            }
            (NodePayload::Parameter { children, .. }, NodeKind::Parameter) => children.push(id),
            _ => unreachable!("attachment table validated above"),
        }

        Ok(id)
    }

    /// Gets a node.
    ///
    /// # Errors
    ///
    /// Fails if the id was never allocated, or is stale after slot reuse.
    pub fn get(&self, id: NodeId) -> Result<&SignatureNode> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or_else(|| Error::node_not_found(id))?;
        if slot.generation != id.generation {
            return Err(Error::stale_node(id));
        }
        slot.node.as_ref().ok_or_else(|| Error::node_not_found(id))
    }

    /// Gets a node mutably.
    ///
    /// # Errors
    ///
    /// Fails if the id was never allocated, or is stale after slot reuse.
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut SignatureNode> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or_else(|| Error::node_not_found(id))?;
        if slot.generation != id.generation {
            return Err(Error::stale_node(id));
        }
        slot.node.as_mut().ok_or_else(|| Error::node_not_found(id))
    }

    /// Returns the parent of a node, `None` for the root.
    ///
    /// # Errors
    ///
    /// Fails if the id is invalid.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent())
    }

    /// Returns the structural children of a node in order.
    ///
    /// # Errors
    ///
    /// Fails if the id is invalid.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.get(id)?.payload().children())
    }

    /// Returns the parameter lists of an operation.
    ///
    /// # Errors
    ///
    /// Fails if `operation` is invalid or not an operation.
    pub fn parameter_lists(&self, operation: NodeId) -> Result<Vec<NodeId>> {
        match self.get(operation)?.payload() {
            NodePayload::Operation { parameter_lists } => Ok(parameter_lists.clone()),
            other => Err(Error::kind_mismatch(NodeKind::Operation, other.kind())),
        }
    }

    /// Returns an operation's first parameter list with the given direction.
    fn list_with_direction(
        &self,
        operation: NodeId,
        wanted: ListDirection,
    ) -> Result<Vec<NodeId>> {
        let mut found = Vec::new();
        for list in self.parameter_lists(operation)? {
            if let NodePayload::ParameterList { direction, .. } = self.get(list)?.payload() {
                if *direction == wanted {
                    found.push(list);
                }
            }
        }
        Ok(found)
    }

    /// Returns the input parameter list of an operation, if present.
    ///
    /// # Errors
    ///
    /// Fails if `operation` is invalid or not an operation.
    pub fn input_parameters(&self, operation: NodeId) -> Result<Option<NodeId>> {
        Ok(self
            .list_with_direction(operation, ListDirection::Input)?
            .into_iter()
            .next())
    }

    /// Returns the output parameter list of an operation, if present.
    ///
    /// # Errors
    ///
    /// Fails if `operation` is invalid or not an operation.
    pub fn output_parameters(&self, operation: NodeId) -> Result<Option<NodeId>> {
        Ok(self
            .list_with_direction(operation, ListDirection::Output)?
            .into_iter()
            .next())
    }

    /// Returns all fault parameter lists of an operation.
    ///
    /// # Errors
    ///
    /// Fails if `operation` is invalid or not an operation.
    pub fn fault_lists(&self, operation: NodeId) -> Result<Vec<NodeId>> {
        self.list_with_direction(operation, ListDirection::Fault)
    }

    /// Recursive structural size: 1 plus the sizes of all structural children.
    ///
    /// Used as a structural sanity check after round-tripping an artifact
    /// through parse, write, and parse again.
    ///
    /// # Errors
    ///
    /// Fails if the id is invalid.
    pub fn size(&self, id: NodeId) -> Result<usize> {
        let mut total = 1;
        for child in self.children(id)? {
            total += self.size(child)?;
        }
        Ok(total)
    }

    /// Detaches a subtree and frees all of its slots.
    ///
    /// Ids into the removed subtree become stale.
    ///
    /// # Errors
    ///
    /// Fails if the id is invalid.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        let parent = self.parent(id)?;

        if let Some(parent) = parent {
            let parent_node = self.get_mut(parent)?;
            match parent_node.payload_mut() {
                NodePayload::Artifact { interfaces } => interfaces.retain(|&c| c != id),
                NodePayload::Interface {
                    operations,
                    inner_interfaces,
                } => {
                    operations.retain(|&c| c != id);
                    inner_interfaces.retain(|&c| c != id);
                }
                NodePayload::Operation { parameter_lists } => {
                    parameter_lists.retain(|&c| c != id);
                }
                NodePayload::ParameterList { parameters, .. } => parameters.retain(|&c| c != id),
                NodePayload::Parameter { children, .. } => children.retain(|&c| c != id),
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        self.free_subtree(id)
    }

    fn free_subtree(&mut self, id: NodeId) -> Result<()> {
        for child in self.children(id)? {
            self.free_subtree(child)?;
        }

        let slot = &mut self.slots[id.index as usize];
        slot.generation += 1;
        slot.node = None;
        self.free.push(id.index);
        self.live -= 1;
        Ok(())
    }

    /// Deep-copies the subtree at `source` under `new_parent` in this tree.
    ///
    /// Every descendant is copied and re-parented under the copied ancestor;
    /// the copy shares no mutable state with the source subtree.
    ///
    /// # Errors
    ///
    /// Fails if either id is invalid or `new_parent` does not accept the
    /// source node's kind.
    pub fn copy(&mut self, source: NodeId, new_parent: NodeId) -> Result<NodeId> {
        // Validate before snapshotting so the cheap failures stay cheap.
        let source_kind = self.get(source)?.kind();
        let parent_kind = self.get(new_parent)?.kind();
        if !accepts_child(parent_kind, source_kind) {
            return Err(Error::kind_mismatch(parent_kind, source_kind));
        }

        let snapshot = self.clone();
        snapshot.copy_into(source, self, Some(new_parent))
    }

    /// Deep-copies the subtree at `source` into `dest`.
    ///
    /// With `new_parent == None` the source must be an artifact and becomes
    /// the destination tree's root.
    ///
    /// # Errors
    ///
    /// Fails if `source` is invalid, `new_parent` is invalid or incompatible,
    /// or the destination already has a root when copying an artifact.
    pub fn copy_into(
        &self,
        source: NodeId,
        dest: &mut SignatureTree,
        new_parent: Option<NodeId>,
    ) -> Result<NodeId> {
        let src_node = self.get(source)?;
        let mut shell = src_node.clone();
        *shell.payload_mut() = src_node.payload().scalar_copy();
        shell.set_parent(None);

        let new_id = match new_parent {
            Some(parent) => dest.attach(parent, shell)?,
            None => dest.insert_artifact(shell)?,
        };

        for child in src_node.payload().children() {
            self.copy_into(child, dest, Some(new_id))?;
        }

        Ok(new_id)
    }

    /// Compares two subtrees field-for-field, ignoring node ids and parent
    /// identity.
    #[must_use]
    pub fn structurally_equal(&self, a: NodeId, other: &SignatureTree, b: NodeId) -> bool {
        let (Ok(node_a), Ok(node_b)) = (self.get(a), other.get(b)) else {
            return false;
        };

        if !node_a.core_eq(node_b) || !node_a.payload().scalar_eq(node_b.payload()) {
            return false;
        }

        let children_a = node_a.payload().children();
        let children_b = node_b.payload().children();
        children_a.len() == children_b.len()
            && children_a
                .into_iter()
                .zip(children_b)
                .all(|(ca, cb)| self.structurally_equal(ca, other, cb))
    }

    /// Builds the dotted/typed identifier path of an element.
    ///
    /// Each ancestor with a qualified identifier contributes one segment;
    /// parameters append their qualified data type behind the type delimiter.
    ///
    /// # Errors
    ///
    /// Fails if the id is invalid.
    pub fn signature_path(&self, id: NodeId, delimiters: &Delimiters) -> Result<String> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            chain.push(node_id);
            current = self.parent(node_id)?;
        }
        chain.reverse();

        let mut segments = Vec::new();
        for node_id in chain {
            let node = self.get(node_id)?;
            if node.qualified_identifier.is_empty() {
                continue;
            }
            let mut segment = node.qualified_identifier.clone();
            if let NodePayload::Parameter {
                qualified_data_type,
                ..
            } = node.payload()
            {
                if !qualified_data_type.is_empty() {
                    segment.push_str(&delimiters.type_delimiter);
                    segment.push_str(qualified_data_type);
                }
            }
            segments.push(segment);
        }

        Ok(segments.join(&delimiters.path_delimiter))
    }

    /// Walks the subtree at `root` and attaches `documentation` to the
    /// element whose signature path equals the documentation's element path.
    ///
    /// Returns true if a matching element was found.
    ///
    /// # Errors
    ///
    /// Fails if an id in the subtree is invalid.
    pub fn attach_matching_documentation(
        &mut self,
        root: NodeId,
        delimiters: &Delimiters,
        documentation: &Documentation,
    ) -> Result<bool> {
        let Some(target_path) = documentation.element_path.clone() else {
            return Ok(false);
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.signature_path(id, delimiters)? == target_path {
                self.get_mut(id)?.add_documentation(documentation.clone());
                return Ok(true);
            }
            let mut children = self.children(id)?;
            children.reverse();
            stack.extend(children);
        }

        Ok(false)
    }

    fn alloc(&mut self, mut node: SignatureNode, parent: Option<NodeId>) -> NodeId {
        node.set_parent(parent);
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(index, 1)
        }
    }
}
