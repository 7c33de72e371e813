//! 感知机训练配置

/// 感知机的训练配置（固定迭代次数，无收敛判断与提前停止）
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// 学习率α
    pub learning_rate: f32,
    /// 迭代次数；第`i`次迭代使用第`i % 行数`个样本
    pub iterations: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 100,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
