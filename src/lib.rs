//! # ML Play
//!
//! `ml_play`用纯rust实现了一个以邻接矩阵表示的有向加权图，并在其上构建了按结构递归求值的
//! 前馈神经网络（而非稠密的逐层矩阵运算），另外还提供了一个可在线训练的感知机。
//!
//! - [`graph::WeightedDigraph`]：只读的有向加权图，源/汇顶点由结构推得；
//! - [`ann::FeedforwardEvaluator`]：把输入绑定到源顶点，递归激活每个汇顶点；
//! - [`ann::Perceptron`]：带偏置的线性阈值单元，按固定迭代次数训练。
//!

pub mod ann;
pub mod errors;
pub mod graph;
pub mod utils;

pub use ann::{FeedforwardEvaluator, Perceptron, TrainConfig};
pub use errors::AnnError;
pub use graph::WeightedDigraph;
