/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 感知机的激活函数
 */

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::sync::Arc;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Activation {
    Heaviside(Heaviside),
    Step(Step),
    Identity(Identity),
    Sign(Sign),
    Sigmoid(Sigmoid),
    Custom(CustomActivation),
}

#[enum_dispatch(Activation)]
pub trait TraitActivation {
    fn apply(&self, x: f32) -> f32;
}

impl Default for Activation {
    fn default() -> Self {
        Heaviside.into()
    }
}

/// 硬阈值：`x > 0`时为1，否则为0（注意`heaviside(0) == 0`）
///
/// # 示例
///
/// ```
/// use ml_play::ann::{Heaviside, TraitActivation};
///
/// assert_eq!(Heaviside.apply(0.0), 0.0);
/// assert_eq!(Heaviside.apply(0.5), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Heaviside;
impl TraitActivation for Heaviside {
    fn apply(&self, x: f32) -> f32 {
        if x > 0.0 { 1.0 } else { 0.0 }
    }
}

/// 阶跃：`x >= 0`时为1，否则为0
#[derive(Debug, Clone, Copy, Default)]
pub struct Step;
impl TraitActivation for Step {
    fn apply(&self, x: f32) -> f32 {
        if x >= 0.0 { 1.0 } else { 0.0 }
    }
}

/// 恒等：配合感知机的训练规则即为最小均方（LMS/ADALINE）更新
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;
impl TraitActivation for Identity {
    fn apply(&self, x: f32) -> f32 {
        x
    }
}

/// 符号：`x >= 0`时为1，否则为-1
#[derive(Debug, Clone, Copy, Default)]
pub struct Sign;
impl TraitActivation for Sign {
    fn apply(&self, x: f32) -> f32 {
        if x >= 0.0 { 1.0 } else { -1.0 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;
impl TraitActivation for Sigmoid {
    fn apply(&self, x: f32) -> f32 {
        1.0 / (1.0 + (-x).exp())
    }
}

#[derive(Clone)]
pub struct CustomActivation {
    func: Arc<dyn Fn(f32) -> f32 + Send + Sync>,
}
impl CustomActivation {
    pub fn new(func: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }
}
impl fmt::Debug for CustomActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomActivation(<fn>)")
    }
}
impl TraitActivation for CustomActivation {
    fn apply(&self, x: f32) -> f32 {
        (self.func)(x)
    }
}
