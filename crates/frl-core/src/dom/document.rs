//! In-memory document: ordered head and body resource nodes.

/// Kind of resource node injected into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Script,
    Style,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Script => "script",
            ResourceKind::Style => "style",
        }
    }
}

/// Opaque handle for one injected node. Stable across unrelated
/// insertions and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Debug, Clone)]
struct ResourceNode {
    id: NodeId,
    kind: ResourceKind,
    url: String,
}

/// Minimal ordered document model: a head section and a body section.
///
/// Insertion follows the placement rules that make fallback loading safe
/// on a real page: scripts go immediately before the first existing script
/// node (so they execute no later than the page's own scripts), styles are
/// appended at the end of the head (so they load after, and override,
/// earlier stylesheets).
#[derive(Debug, Default)]
pub struct Document {
    head: Vec<ResourceNode>,
    body: Vec<ResourceNode>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a node for `url` and return its handle.
    pub fn insert(&mut self, kind: ResourceKind, url: &str) -> NodeId {
        let id = self.alloc_id();
        let node = ResourceNode {
            id,
            kind,
            url: url.to_string(),
        };
        match kind {
            ResourceKind::Style => self.head.push(node),
            ResourceKind::Script => {
                if let Some(pos) = self.head.iter().position(|n| n.kind == ResourceKind::Script) {
                    self.head.insert(pos, node);
                } else if let Some(pos) =
                    self.body.iter().position(|n| n.kind == ResourceKind::Script)
                {
                    self.body.insert(pos, node);
                } else {
                    // No script in the document yet; append to body.
                    self.body.push(node);
                }
            }
        }
        id
    }

    /// Remove a node by handle. Returns false if it was already gone.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if let Some(pos) = self.head.iter().position(|n| n.id == id) {
            self.head.remove(pos);
            return true;
        }
        if let Some(pos) = self.body.iter().position(|n| n.id == id) {
            self.body.remove(pos);
            return true;
        }
        false
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn url_of(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.url.as_str())
    }

    pub fn kind_of(&self, id: NodeId) -> Option<ResourceKind> {
        self.node(id).map(|n| n.kind)
    }

    fn node(&self, id: NodeId) -> Option<&ResourceNode> {
        self.head
            .iter()
            .chain(self.body.iter())
            .find(|n| n.id == id)
    }

    /// URLs of all script nodes, head first, in document order.
    pub fn script_urls(&self) -> Vec<&str> {
        self.urls_of_kind(ResourceKind::Script)
    }

    /// URLs of all style nodes, in document order.
    pub fn style_urls(&self) -> Vec<&str> {
        self.urls_of_kind(ResourceKind::Style)
    }

    fn urls_of_kind(&self, kind: ResourceKind) -> Vec<&str> {
        self.head
            .iter()
            .chain(self.body.iter())
            .filter(|n| n.kind == kind)
            .map(|n| n.url.as_str())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.head.len() + self.body.len()
    }

    /// Render the node for `id` as an HTML tag.
    pub fn render_node(&self, id: NodeId) -> Option<String> {
        self.node(id).map(render_tag)
    }

    /// Render the whole document as HTML.
    pub fn render(&self) -> String {
        let mut out = String::from("<html>\n<head>\n");
        for node in &self.head {
            out.push_str("  ");
            out.push_str(&render_tag(node));
            out.push('\n');
        }
        out.push_str("</head>\n<body>\n");
        for node in &self.body {
            out.push_str("  ");
            out.push_str(&render_tag(node));
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn render_tag(node: &ResourceNode) -> String {
    match node.kind {
        ResourceKind::Script => format!("<script src=\"{}\" async></script>", node.url),
        ResourceKind::Style => format!("<link rel=\"stylesheet\" href=\"{}\">", node.url),
    }
}
