// Incremental path tree of observed request targets

use serde::Serialize;

/// One segment of an observed target: a hostname or a single path component.
///
/// Serializes as `{"Name": ..., "Children": [...]}`. `Children` is always
/// emitted, as `[]` for a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Children")]
    children: Vec<Node>,
}

impl Node {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in first-insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Number of levels below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> = vec![(self, 0)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }

        deepest
    }
}

// Paths have no depth limit, so children are freed from a heap stack
// instead of one native frame per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Accumulates observed targets as a tree of segments.
///
/// The root is a nameless container that is never exposed; consumers only
/// ever see its children through [`PathTree::structure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    root: Node,
    len: usize,
}

impl Default for PathTree {
    fn default() -> Self {
        Self {
            root: Node::new(""),
            len: 0,
        }
    }
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one observed target, conventionally `[host, seg1, seg2, ...]`.
    ///
    /// Empty segments are dropped first, so leading, trailing and doubled
    /// slashes in the source path have no effect. Existing nodes are reused
    /// for the longest matching prefix and only the remaining suffix is
    /// appended, so inserting the same target twice is a no-op.
    pub fn insert<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = &mut self.root;

        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }

            let index = match current.children.iter().position(|c| c.name == segment) {
                Some(index) => index,
                None => {
                    current.children.push(Node::new(segment));
                    self.len += 1;
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }
    }

    /// Top-level nodes (one per host) for rendering or serialization.
    pub fn structure(&self) -> &[Node] {
        &self.root.children
    }

    /// Walk an exact segment path from the root. Empty segments are skipped
    /// the same way [`PathTree::insert`] skips them.
    pub fn get<I, S>(&self, segments: I) -> Option<&Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = &self.root;
        let mut walked = false;

        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            current = current.child(segment)?;
            walked = true;
        }

        walked.then_some(current)
    }

    /// Total number of named nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of top-level (host) nodes.
    pub fn host_count(&self) -> usize {
        self.root.children.len()
    }
}
