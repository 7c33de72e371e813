/*
 * @Author       : 老董
 * @Date         : 2026-10-13
 * @Description  : 结构化前馈求值：源顶点接收输入，汇顶点的值由前驱逐层归约得出
 */

use super::combinator::{Combinator, TraitCombinator};
use crate::errors::{AnnError, Operation};
use crate::graph::WeightedDigraph;
use std::collections::BTreeMap;
use tracing::debug;

/// 以有向加权图为拓扑、配合聚合函数求值的前馈网络
///
/// 求值器本身在多次调用之间不保存任何状态，输入绑定只存在于单次调用的[`ForwardPass`]中。
///
/// # 示例
///
/// ```
/// use ml_play::ann::{FeedforwardEvaluator, Sum};
/// use ml_play::graph::WeightedDigraph;
///
/// // 0 → 2 ← 1
/// let graph = WeightedDigraph::from_rows(&[
///     vec![None, None, Some(2.0)],
///     vec![None, None, Some(-1.0)],
///     vec![None, None, None],
/// ])
/// .unwrap();
/// let net = FeedforwardEvaluator::new(graph, Sum);
/// let outputs = net.feedforward(&[3.0, 4.0]).unwrap();
/// assert_eq!(outputs[&2], 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct FeedforwardEvaluator {
    graph: WeightedDigraph,
    combinator: Combinator,
}

impl FeedforwardEvaluator {
    pub fn new(graph: WeightedDigraph, combinator: impl Into<Combinator>) -> Self {
        let combinator = combinator.into();
        debug!(
            order = graph.order(),
            edges = graph.edge_count(),
            ?combinator,
            "构造前馈求值器"
        );
        Self { graph, combinator }
    }

    pub fn graph(&self) -> &WeightedDigraph {
        &self.graph
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// 按源顶点的升序把`inputs`逐个绑定到源顶点上，得到一次求值所用的临时状态
    pub fn bind(&self, inputs: &[f32]) -> Result<ForwardPass<'_>, AnnError> {
        let sources = self.graph.sources().collect::<Vec<_>>();
        if sources.len() != inputs.len() {
            return Err(AnnError::LengthMismatch {
                operation: Operation::Feedforward,
                expected: sources.len(),
                got: inputs.len(),
            });
        }

        let mut slots = vec![Slot::Unvisited; self.graph.order()];
        for (&source, &value) in sources.iter().zip(inputs) {
            slots[source] = Slot::Ready(value);
        }
        Ok(ForwardPass {
            evaluator: self,
            slots,
        })
    }

    /// 前馈求值，返回各汇顶点的索引到其值的映射
    pub fn feedforward(&self, inputs: &[f32]) -> Result<BTreeMap<usize, f32>, AnnError> {
        let mut pass = self.bind(inputs)?;
        let outputs = self
            .graph
            .sinks()
            .map(|sink| Ok((sink, pass.activate(sink)?)))
            .collect::<Result<BTreeMap<_, _>, AnnError>>()?;
        debug!(?inputs, ?outputs, "前馈求值完成");
        Ok(outputs)
    }

    /// 在给定输入下单独激活某一个顶点
    pub fn activate(&self, inputs: &[f32], vertex: usize) -> Result<f32, AnnError> {
        self.bind(inputs)?.activate(vertex)
    }
}

/// 单个顶点在一次求值中的状态
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Unvisited,
    /// 正在等待其前驱的值；遍历中再次遇到即说明图中有环
    Visiting,
    Ready(f32),
}

/// 一次前馈求值的临时状态：输入绑定加上按顶点索引缓存的激活值
///
/// 缓存只在本次求值内有效，共享祖先的子图只会被计算一次，不改变结果。
#[derive(Debug)]
pub struct ForwardPass<'a> {
    evaluator: &'a FeedforwardEvaluator,
    slots: Vec<Slot>,
}

/// 显式栈中的一帧：正在等待前驱值的顶点
#[derive(Debug)]
struct Frame {
    vertex: usize,
    incoming: Vec<(usize, f32)>,
    next: usize,
    weighted: Vec<f32>,
}

impl Frame {
    /// 记录第`next`个前驱的值（乘以对应边的代价）
    fn accept(&mut self, value: f32) {
        self.weighted.push(self.incoming[self.next].1 * value);
        self.next += 1;
    }
}

impl ForwardPass<'_> {
    /// 激活顶点`vertex`
    ///
    /// - 源顶点：返回绑定的输入值；
    /// - 其余顶点（包括汇顶点）：对每个前驱`u`（按索引升序）计算`weight(u, v) * activate(u)`，
    ///   再交给聚合函数归约。
    ///
    /// 用显式栈做后序遍历，图的深度不受线程栈大小限制。
    pub fn activate(&mut self, vertex: usize) -> Result<f32, AnnError> {
        let evaluator = self.evaluator;
        let order = self.slots.len();
        match self.slots.get(vertex) {
            None => return Err(AnnError::VertexOutOfRange { vertex, order }),
            Some(Slot::Ready(value)) => return Ok(*value),
            Some(Slot::Visiting) => return Err(AnnError::CycleDetected { vertex }),
            Some(Slot::Unvisited) => {}
        }

        let mut stack = vec![self.enter(evaluator, vertex)?];
        while let Some(frame) = stack.last_mut() {
            let Some(&(head, _)) = frame.incoming.get(frame.next) else {
                let value = evaluator.combinator.combine(&frame.weighted);
                let done = frame.vertex;
                stack.pop();
                self.slots[done] = Slot::Ready(value);
                match stack.last_mut() {
                    Some(parent) => parent.accept(value),
                    None => return Ok(value),
                }
                continue;
            };

            match self.slots[head] {
                Slot::Ready(value) => frame.accept(value),
                Slot::Visiting => {
                    self.abandon(&stack);
                    return Err(AnnError::CycleDetected { vertex: head });
                }
                Slot::Unvisited => match self.enter(evaluator, head) {
                    Ok(child) => stack.push(child),
                    Err(e) => {
                        self.abandon(&stack);
                        return Err(e);
                    }
                },
            }
        }
        Err(AnnError::CycleDetected { vertex })
    }

    fn enter(&mut self, evaluator: &FeedforwardEvaluator, vertex: usize) -> Result<Frame, AnnError> {
        let incoming = evaluator.graph.incoming(vertex)?;
        self.slots[vertex] = Slot::Visiting;
        Ok(Frame {
            vertex,
            weighted: Vec::with_capacity(incoming.len()),
            incoming,
            next: 0,
        })
    }

    /// 出错时把栈中顶点恢复为未访问，避免后续调用误报环
    fn abandon(&mut self, stack: &[Frame]) {
        for frame in stack {
            self.slots[frame.vertex] = Slot::Unvisited;
        }
    }
}
