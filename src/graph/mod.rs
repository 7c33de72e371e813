/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 基于邻接矩阵的有向加权图（前馈网络的底层结构）
 */

//! # 有向加权图模块
//!
//! 图由一个`order × order`的方阵描述：`matrix[[u, v]]`为`Some(w)`表示存在一条
//! 代价为`w`的有向边`u → v`，为`None`表示不存在该边。
//!
//! 判断边是否存在的唯一依据就是该格是否为`Some`（见[`WeightedDigraph::has_edge`]），
//! 因此权重为0或负数的边都是合法数据。
//!
//! 图在构造后只读，不提供增删边的操作。

#[cfg(test)]
mod tests;

mod print;

use crate::errors::AnnError;
use ndarray::Array2;

/// 邻接矩阵表示的有向加权图
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDigraph {
    matrix: Array2<Option<f32>>,
}

impl WeightedDigraph {
    /// 由方阵构造图，矩阵非方阵时报错
    ///
    /// # 示例
    ///
    /// ```
    /// use ml_play::graph::WeightedDigraph;
    /// use ndarray::array;
    ///
    /// let graph = WeightedDigraph::new(array![[None, Some(0.5)], [None, None]]).unwrap();
    /// assert_eq!(graph.order(), 2);
    /// assert_eq!(graph.weight(0, 1).unwrap(), Some(0.5));
    /// ```
    pub fn new(matrix: Array2<Option<f32>>) -> Result<Self, AnnError> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(AnnError::NotSquareShape { rows, cols });
        }
        Ok(Self { matrix })
    }

    /// 由嵌套的行向量构造图，逐行校验列数
    pub fn from_rows(rows: &[Vec<Option<f32>>]) -> Result<Self, AnnError> {
        let order = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != order) {
            return Err(AnnError::NotSquare {
                rows: order,
                row,
                len: r.len(),
            });
        }
        let matrix = Array2::from_shape_fn((order, order), |(u, v)| rows[u][v]);
        Ok(Self { matrix })
    }

    /// 空图（0个顶点）
    pub fn empty() -> Self {
        Self {
            matrix: Array2::from_elem((0, 0), None),
        }
    }

    /// `k`阶完全图：任意两个不同顶点间都有权重为1的边，无自环
    ///
    /// NOTE: `k ≥ 2`时该图有环，只适合做结构查询，不能用于前馈求值
    pub fn complete(k: usize) -> Self {
        Self {
            matrix: Array2::from_shape_fn((k, k), |(u, v)| (u != v).then_some(1.0)),
        }
    }

    /// 顶点个数
    pub fn order(&self) -> usize {
        self.matrix.nrows()
    }

    /// 边`u → v`的代价；无此边时为`None`
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<f32>, AnnError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix[[u, v]])
    }

    /// 是否存在边`u → v`
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, AnnError> {
        Ok(self.weight(u, v)?.is_some())
    }

    /// 顶点`v`的所有前驱（按索引升序），即扫描第`v`列
    pub fn heads(&self, v: usize) -> Result<Vec<usize>, AnnError> {
        self.check_vertex(v)?;
        Ok(self
            .matrix
            .column(v)
            .iter()
            .enumerate()
            .filter_map(|(u, w)| w.is_some().then_some(u))
            .collect())
    }

    /// 顶点`v`的所有后继（按索引升序），即扫描第`v`行
    pub fn tails(&self, v: usize) -> Result<Vec<usize>, AnnError> {
        self.check_vertex(v)?;
        Ok(self
            .matrix
            .row(v)
            .iter()
            .enumerate()
            .filter_map(|(u, w)| w.is_some().then_some(u))
            .collect())
    }

    /// 顶点`v`的所有前驱及对应边的代价`(u, weight(u, v))`（按索引升序）
    pub fn incoming(&self, v: usize) -> Result<Vec<(usize, f32)>, AnnError> {
        self.check_vertex(v)?;
        Ok(self
            .matrix
            .column(v)
            .iter()
            .enumerate()
            .filter_map(|(u, &w)| w.map(|w| (u, w)))
            .collect())
    }

    /// 没有前驱的顶点（按索引升序，每次调用都重新计算）
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.order()).filter(move |&v| self.column_is_empty(v))
    }

    /// 没有后继的顶点（按索引升序，每次调用都重新计算）
    pub fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.order()).filter(move |&v| self.row_is_empty(v))
    }

    pub fn is_source(&self, v: usize) -> Result<bool, AnnError> {
        self.check_vertex(v)?;
        Ok(self.column_is_empty(v))
    }

    pub fn is_sink(&self, v: usize) -> Result<bool, AnnError> {
        self.check_vertex(v)?;
        Ok(self.row_is_empty(v))
    }

    /// 按行优先顺序遍历所有边`(u, v, w)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.matrix
            .indexed_iter()
            .filter_map(|((u, v), &w)| w.map(|w| (u, v, w)))
    }

    pub fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|w| w.is_some()).count()
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), AnnError> {
        let order = self.order();
        if vertex >= order {
            return Err(AnnError::VertexOutOfRange { vertex, order });
        }
        Ok(())
    }

    fn column_is_empty(&self, v: usize) -> bool {
        self.matrix.column(v).iter().all(Option::is_none)
    }

    fn row_is_empty(&self, v: usize) -> bool {
        self.matrix.row(v).iter().all(Option::is_none)
    }
}
