use std::fmt::{self, Display};

/// 触发长度校验失败的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 前馈网络：输入值个数须与源顶点个数一致
    Feedforward,
    /// 感知机激活：输入向量长度须等于输入个数
    PerceptronActivate,
    /// 感知机构造：权重个数须等于输入个数+1（含偏置）
    PerceptronWeights,
    /// 数据集的一行：输入个数+1（末列为目标值）
    DatasetRow,
}
impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match self {
            Operation::Feedforward => "前馈输入",
            Operation::PerceptronActivate => "感知机激活",
            Operation::PerceptronWeights => "感知机权重",
            Operation::DatasetRow => "数据集行",
        };
        write!(f, "{}", operation_name)
    }
}
