/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 感知机：带偏置的单个线性阈值单元，按固定迭代次数在线训练
 */

use super::activation::{Activation, TraitActivation};
use super::config::TrainConfig;
use crate::errors::{AnnError, Operation};
use ndarray::{ArrayView2, s};
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// 感知机
///
/// 权重共`input_count + 1`个：第0个为偏置的权重（对应恒为1的输入），
/// 其余按位置对应各个输入。
///
/// 数据集为二维数组，每行前`input_count`列为特征，最后一列为目标值。
///
/// # 示例
///
/// ```
/// use ml_play::ann::Perceptron;
///
/// let perceptron = Perceptron::with_weights(1, &[0.0, 1.0]).unwrap();
/// assert_eq!(perceptron.activate(&[0.5]).unwrap(), 1.0);
/// assert_eq!(perceptron.activate(&[-1.0]).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Perceptron {
    input_count: usize,
    weights: Vec<f32>,
    activation: Activation,
}

impl Perceptron {
    /// 权重全为0、激活函数为硬阈值的感知机
    pub fn new(input_count: usize) -> Self {
        Self {
            input_count,
            weights: vec![0.0; input_count + 1],
            activation: Activation::default(),
        }
    }

    /// 指定初始权重（含偏置，长度须为`input_count + 1`）
    pub fn with_weights(input_count: usize, weights: &[f32]) -> Result<Self, AnnError> {
        if weights.len() != input_count + 1 {
            return Err(AnnError::LengthMismatch {
                operation: Operation::PerceptronWeights,
                expected: input_count + 1,
                got: weights.len(),
            });
        }
        Ok(Self {
            input_count,
            weights: weights.to_vec(),
            activation: Activation::default(),
        })
    }

    /// 以固定种子在[-0.5, 0.5)内均匀随机初始化权重（确保可重复性）
    pub fn with_seed(input_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let uniform = Uniform::new(-0.5, 0.5);
        Self {
            input_count,
            weights: (0..=input_count).map(|_| uniform.sample(&mut rng)).collect(),
            activation: Activation::default(),
        }
    }

    pub fn with_activation(mut self, activation: impl Into<Activation>) -> Self {
        self.activation = activation.into();
        self
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn bias(&self) -> f32 {
        self.weights[0]
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    /// `activation(bias + Σ weights[i+1] * inputs[i])`
    pub fn activate(&self, inputs: &[f32]) -> Result<f32, AnnError> {
        if inputs.len() != self.input_count {
            return Err(AnnError::LengthMismatch {
                operation: Operation::PerceptronActivate,
                expected: self.input_count,
                got: inputs.len(),
            });
        }
        let net = self.weights[1..]
            .iter()
            .zip(inputs)
            .fold(self.weights[0], |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(net))
    }

    /// 逐行激活（忽略最后的目标列）
    pub fn predict(&self, dataset: ArrayView2<f32>) -> Result<Vec<f32>, AnnError> {
        self.check_dataset(&dataset)?;
        dataset
            .rows()
            .into_iter()
            .map(|row| self.activate(&row.slice(s![..self.input_count]).to_vec()))
            .collect()
    }

    /// 使用默认配置（α=0.1，100次迭代）训练
    pub fn train(&mut self, dataset: ArrayView2<f32>) -> Result<(), AnnError> {
        self.train_with(dataset, &TrainConfig::default())
    }

    /// 按感知机规则在线训练：第`i`次迭代取第`i % 行数`个样本，
    /// 所有权重同时更新`w += α * (target - out) * x`（偏置对应的`x`恒为1）。
    ///
    /// 数据集会先整体校验，校验失败时权重保持不变。
    pub fn train_with(
        &mut self,
        dataset: ArrayView2<f32>,
        config: &TrainConfig,
    ) -> Result<(), AnnError> {
        self.check_dataset(&dataset)?;
        if config.iterations == 0 {
            return Ok(());
        }
        let row_count = dataset.nrows();
        if row_count == 0 {
            return Err(AnnError::EmptyDataset);
        }

        debug!(
            input_count = self.input_count,
            rows = row_count,
            learning_rate = config.learning_rate,
            iterations = config.iterations,
            "开始训练感知机"
        );
        for iteration in 0..config.iterations {
            let row = dataset.row(iteration % row_count);
            let features = row.slice(s![..self.input_count]).to_vec();
            let target = row[self.input_count];

            let out = self.activate(&features)?;
            let delta = config.learning_rate * (target - out);
            self.weights[0] += delta;
            for (w, x) in self.weights[1..].iter_mut().zip(&features) {
                *w += delta * x;
            }
            trace!(iteration, ?features, target, out, weights = ?self.weights, "感知机迭代");
        }
        debug!(weights = ?self.weights, "感知机训练结束");
        Ok(())
    }

    /// 预测值与目标值严格相等的样本占比
    pub fn accuracy(&self, dataset: ArrayView2<f32>) -> Result<f32, AnnError> {
        self.check_dataset(&dataset)?;
        if dataset.nrows() == 0 {
            return Err(AnnError::EmptyDataset);
        }
        let predictions = self.predict(dataset.view())?;
        let correct = predictions
            .iter()
            .zip(dataset.column(self.input_count))
            .filter(|&(prediction, target)| prediction == target)
            .count();
        Ok(correct as f32 / dataset.nrows() as f32)
    }

    fn check_dataset(&self, dataset: &ArrayView2<f32>) -> Result<(), AnnError> {
        if dataset.ncols() != self.input_count + 1 {
            return Err(AnnError::LengthMismatch {
                operation: Operation::DatasetRow,
                expected: self.input_count + 1,
                got: dataset.ncols(),
            });
        }
        Ok(())
    }
}
