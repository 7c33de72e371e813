use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnnError {
    // 图的构造
    #[error("邻接矩阵须为方阵：共{rows}行，但第{row}行有{len}列")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("邻接矩阵须为方阵：实际形状为{rows}×{cols}")]
    NotSquareShape { rows: usize, cols: usize },
    #[error("顶点索引{vertex}越界：须在[0, {order})范围内")]
    VertexOutOfRange { vertex: usize, order: usize },

    // 长度校验（不做截断或补零）
    #[error("{operation}长度不一致：期望{expected}，实际为{got}")]
    LengthMismatch {
        operation: Operation,
        expected: usize,
        got: usize,
    },

    // 前提条件：图必须无环
    #[error("激活顶点{vertex}时检测到环，前馈求值要求图无环")]
    CycleDetected { vertex: usize },

    #[error("数据集为空")]
    EmptyDataset,
}
