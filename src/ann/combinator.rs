/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 前馈网络中顶点的聚合函数：把前驱的加权值归约为一个值
 */

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::sync::Arc;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Combinator {
    Sum(Sum),
    Mean(Mean),
    Max(Max),
    Min(Min),
    Product(Product),
    Threshold(Threshold),
    Custom(CustomCombinator),
}

#[enum_dispatch(Combinator)]
pub trait TraitCombinator {
    /// 按前驱索引升序传入的加权值（非源顶点至少有一个前驱，故`values`非空）
    fn combine(&self, values: &[f32]) -> f32;
}

impl Default for Combinator {
    fn default() -> Self {
        Sum.into()
    }
}

/// 求和（默认）
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;
impl TraitCombinator for Sum {
    fn combine(&self, values: &[f32]) -> f32 {
        values.iter().sum()
    }
}

/// 算术平均
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;
impl TraitCombinator for Mean {
    fn combine(&self, values: &[f32]) -> f32 {
        values.iter().sum::<f32>() / values.len() as f32
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Max;
impl TraitCombinator for Max {
    fn combine(&self, values: &[f32]) -> f32 {
        values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Min;
impl TraitCombinator for Min {
    fn combine(&self, values: &[f32]) -> f32 {
        values.iter().copied().fold(f32::INFINITY, f32::min)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Product;
impl TraitCombinator for Product {
    fn combine(&self, values: &[f32]) -> f32 {
        values.iter().product()
    }
}

/// 阈值：加权和严格大于`level`时为1，否则为0
#[derive(Debug, Clone, Copy, Default)]
pub struct Threshold {
    pub level: f32,
}
impl Threshold {
    pub fn new(level: f32) -> Self {
        Self { level }
    }
}
impl TraitCombinator for Threshold {
    fn combine(&self, values: &[f32]) -> f32 {
        if values.iter().sum::<f32>() > self.level {
            1.0
        } else {
            0.0
        }
    }
}

/// 用户自定义的聚合函数
#[derive(Clone)]
pub struct CustomCombinator {
    func: Arc<dyn Fn(&[f32]) -> f32 + Send + Sync>,
}
impl CustomCombinator {
    pub fn new(func: impl Fn(&[f32]) -> f32 + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }
}
impl fmt::Debug for CustomCombinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomCombinator(<fn>)")
    }
}
impl TraitCombinator for CustomCombinator {
    fn combine(&self, values: &[f32]) -> f32 {
        (self.func)(values)
    }
}
