//! The `Graph` container.
//!
//! Directed only. Adjacency is kept eagerly as per-node lists of edge slots; removed edges leave a
//! tombstone so slot indices stay stable and insertion order is preserved for the survivors.

mod edge_key;

pub use edge_key::EdgeKey;
use edge_key::EdgeKeyView;

use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    pub multigraph: bool,
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    options: GraphOptions,

    graph_label: G,
    default_edge_label: Box<dyn Fn() -> E + Send + Sync>,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<Option<EdgeEntry<E>>>,
    edge_index: HashMap<EdgeKey, usize>,
    live_edges: usize,

    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            default_edge_label: Box::new(E::default),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            live_edges: 0,
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Box::new(f);
        self
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts `id`, or replaces its label if it already exists (position is kept).
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self.node_index.insert(id, idx);
        self
    }

    fn ensure_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        self.set_node(id, N::default());
        self.nodes.len() - 1
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Position of `id` in node insertion order.
    pub fn node_position(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&str, &N),
    {
        for n in &self.nodes {
            f(&n.id, &n.label);
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(&n.id, &mut n.label);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().flatten().map(|e| &e.key)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges().cloned().collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Inserts or relabels the edge `v -> w` (named when the graph is a multigraph).
    ///
    /// Missing endpoints are created with a default label.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };

        let view = EdgeKeyView {
            v: &v,
            w: &w,
            name: name.as_deref(),
        };
        if let Some(&slot) = self.edge_index.get(&view) {
            if let (Some(label), Some(entry)) = (label, self.edges[slot].as_mut()) {
                entry.label = label;
            }
            return self;
        }

        let v_idx = self.ensure_node(&v);
        let w_idx = self.ensure_node(&w);
        let slot = self.edges.len();
        let key = EdgeKey { v, w, name };
        self.edges.push(Some(EdgeEntry {
            key: key.clone(),
            label: label.unwrap_or_else(|| (self.default_edge_label)()),
        }));
        self.edge_index.insert(key, slot);
        self.out_adj[v_idx].push(slot);
        self.in_adj[w_idx].push(slot);
        self.live_edges += 1;
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    fn view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        let name = if self.options.multigraph { name } else { None };
        EdgeKeyView { v, w, name }
    }

    fn slot_of(&self, view: EdgeKeyView<'_>) -> Option<usize> {
        self.edge_index.get(&view).copied()
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.slot_of(self.view(v, w, name)).is_some()
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let slot = self.slot_of(self.view(v, w, name))?;
        self.edges[slot].as_ref().map(|e| &e.label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w, key.name.as_deref())
    }

    pub fn edge_mut_by_key(&mut self, key: &EdgeKey) -> Option<&mut E> {
        let slot = self.slot_of(self.view(&key.v, &key.w, key.name.as_deref()))?;
        self.edges[slot].as_mut().map(|e| &mut e.label)
    }

    /// Removes the edge and returns its label.
    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> Option<E> {
        let view = self.view(&key.v, &key.w, key.name.as_deref());
        let (_, slot) = self.edge_index.remove_entry(&view)?;
        let entry = self.edges[slot].take()?;
        if let Some(&v_idx) = self.node_index.get(entry.key.v.as_str()) {
            self.out_adj[v_idx].retain(|&s| s != slot);
        }
        if let Some(&w_idx) = self.node_index.get(entry.key.w.as_str()) {
            self.in_adj[w_idx].retain(|&s| s != slot);
        }
        self.live_edges -= 1;
        Some(entry.label)
    }

    fn keys_at<'a>(&'a self, slots: &'a [usize]) -> impl Iterator<Item = &'a EdgeKey> + 'a {
        slots
            .iter()
            .filter_map(|&slot| self.edges[slot].as_ref().map(|e| &e.key))
    }

    /// Out-edges of `v`, optionally restricted to those ending at `w`.
    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        let Some(&v_idx) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.keys_at(&self.out_adj[v_idx])
            .filter(|k| w.is_none_or(|w| k.w == w))
            .cloned()
            .collect()
    }

    /// In-edges of `v`, optionally restricted to those starting at `u`.
    pub fn in_edges(&self, v: &str, u: Option<&str>) -> Vec<EdgeKey> {
        let Some(&v_idx) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.keys_at(&self.in_adj[v_idx])
            .filter(|k| u.is_none_or(|u| k.v == u))
            .cloned()
            .collect()
    }

    /// Distinct successors of `v`, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&v_idx) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::new();
        for k in self.keys_at(&self.out_adj[v_idx]) {
            if !out.contains(&k.w.as_str()) {
                out.push(k.w.as_str());
            }
        }
        out
    }

    /// Distinct predecessors of `v`, in edge insertion order.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&v_idx) = self.node_index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::new();
        for k in self.keys_at(&self.in_adj[v_idx]) {
            if !out.contains(&k.v.as_str()) {
                out.push(k.v.as_str());
            }
        }
        out
    }

    /// Nodes without in-edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .zip(&self.in_adj)
            .filter(|(_, ins)| ins.is_empty())
            .map(|(n, _)| n.id.as_str())
            .collect()
    }

    /// Nodes without out-edges, in insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .zip(&self.out_adj)
            .filter(|(_, outs)| outs.is_empty())
            .map(|(n, _)| n.id.as_str())
            .collect()
    }
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}
