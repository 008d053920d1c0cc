//! 拓扑排序
//!
//! 深度优先遍历，顶点在其全部后代之后入栈；弹栈顺序即拓扑序。
//! 遍历使用显式工作栈，调用栈深度与图的最长依赖链无关。

use crate::collection::Stack;
use crate::graph::Graph;

/// 工作栈中的一帧：当前顶点及其尚未检查的后继
struct Frame {
    label: String,
    neighbors: Vec<String>,
    next: usize,
}

impl Frame {
    fn enter(graph: &mut Graph, label: &str) -> Self {
        graph.mark_vertex(label);
        let neighbors = graph
            .neighboring_vertices(label)
            .map(|it| it.map(String::from).collect())
            .unwrap_or_default();
        Self {
            label: label.to_string(),
            neighbors,
            next: 0,
        }
    }
}

/// 返回顶点的后序栈，弹栈顺序为拓扑序
///
/// 图中存在环时仍会终止，但结果不是合法的拓扑序。
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topo_stack(graph: &mut Graph) -> Stack<String> {
    let mut stack = Stack::new();
    graph.clear_vertex_marks();

    let labels: Vec<String> = graph.labels().map(String::from).collect();
    for label in &labels {
        if graph.is_vertex_marked(label) {
            continue;
        }

        let mut work = vec![Frame::enter(graph, label)];
        while let Some(frame) = work.last_mut() {
            if frame.next < frame.neighbors.len() {
                let neighbor = frame.neighbors[frame.next].clone();
                frame.next += 1;
                if !graph.is_vertex_marked(&neighbor) {
                    work.push(Frame::enter(graph, &neighbor));
                }
            } else if let Some(done) = work.pop() {
                stack.push(done.label);
            }
        }
    }

    tracing::debug!(sorted = labels.len(), "topological sort finished");
    stack
}

/// 返回拓扑序的顶点标签
pub fn topo_sort(graph: &mut Graph) -> Vec<String> {
    topo_stack(graph).into_pop_order()
}
