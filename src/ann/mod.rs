/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 结构化求值的人工神经网络：前馈求值器与感知机
 */

mod activation;
mod combinator;
mod config;
mod feedforward;
mod perceptron;

pub use activation::{
    Activation, CustomActivation, Heaviside, Identity, Sigmoid, Sign, Step, TraitActivation,
};
pub use combinator::{
    Combinator, CustomCombinator, Max, Mean, Min, Product, Sum, Threshold, TraitCombinator,
};
pub use config::TrainConfig;
pub use feedforward::{FeedforwardEvaluator, ForwardPass};
pub use perceptron::Perceptron;
