/*
 * @Author       : 老董
 * @Date         : 2026-10-15
 * @Description  : 用感知机学习与、或、与非门（线性可分），并确认异或门无法被单个感知机学会
 */
use ml_play::ann::TrainConfig;
use ml_play::Perceptron;
use ndarray::{Array2, array};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 每行：x1, x2, 目标值
fn gate(outputs: [f32; 4]) -> Array2<f32> {
    array![
        [0., 0., outputs[0]],
        [0., 1., outputs[1]],
        [1., 0., outputs[2]],
        [1., 1., outputs[3]],
    ]
}

#[test]
fn test_learn_linearly_separable_gates() {
    init_tracing();

    // 学习率取0.25，训练过程中的浮点运算都是精确的
    let config = TrainConfig::new().learning_rate(0.25);
    for (name, outputs, expected_weights) in [
        ("AND", [0., 0., 0., 1.], [-0.5, 0.5, 0.25]),
        ("OR", [0., 1., 1., 1.], [0.0, 0.25, 0.25]),
        ("NAND", [1., 1., 1., 0.], [0.75, -0.5, -0.25]),
    ] {
        let dataset = gate(outputs);
        let mut perceptron = Perceptron::new(2);
        perceptron.train_with(dataset.view(), &config).unwrap();

        assert_eq!(perceptron.weights(), &expected_weights, "{name}门的权重不符");
        assert_eq!(perceptron.accuracy(dataset.view()).unwrap(), 1.0, "{name}门未学会");
        assert_eq!(perceptron.predict(dataset.view()).unwrap(), outputs.to_vec());
    }
}

#[test]
fn test_more_iterations_do_not_disturb_a_converged_perceptron() {
    init_tracing();

    let dataset = gate([1., 1., 1., 0.]);
    let mut perceptron = Perceptron::new(2);
    let config = TrainConfig::new().learning_rate(0.25).iterations(400);
    perceptron.train_with(dataset.view(), &config).unwrap();
    assert_eq!(perceptron.weights(), &[0.75, -0.5, -0.25]);
}

#[test]
fn test_xor_is_not_linearly_separable() {
    init_tracing();

    let dataset = gate([0., 1., 1., 0.]);
    let mut perceptron = Perceptron::with_seed(2, 2026);
    for _ in 0..5 {
        perceptron.train(dataset.view()).unwrap();
        assert!(perceptron.accuracy(dataset.view()).unwrap() < 1.0);
    }
}
