/// 错误断言宏 - 灵活粒度验证 Result 错误
///
/// # 用法
/// - `assert_err!(expr)` — 只验证是 Err
/// - `assert_err!(expr, LengthMismatch(operation, expected, got))` — 验证长度不一致错误的各字段
/// - `assert_err!(expr, VertexOutOfRange(vertex, order))` — 验证顶点越界错误的各字段
/// - `assert_err!(expr, Pattern { .. })` — 验证错误类型
/// - `assert_err!(expr, Pattern { field, .. } if condition)` — 验证类型 + 条件
///
/// # 示例
/// ```ignore
/// // 只验证是错误
/// assert_err!(result);
///
/// // LengthMismatch 简洁语法（按顺序：operation, expected, got）
/// assert_err!(result, AnnError::LengthMismatch(Operation::Feedforward, 1, 2));
///
/// // VertexOutOfRange 简洁语法（按顺序：vertex, order）
/// assert_err!(result, AnnError::VertexOutOfRange(6, 6));
///
/// // 验证错误类型（忽略所有字段）
/// assert_err!(result, AnnError::CycleDetected { .. });
///
/// // 验证类型 + 关键字段
/// assert_err!(result, AnnError::NotSquare { row, .. } if *row == 2);
/// ```
#[macro_export]
macro_rules! assert_err {
    // 只验证是 Err
    ($expr:expr) => {
        assert!($expr.is_err(), "预期 Err，实际得到 {:?}", $expr);
    };
    // 简洁语法：LengthMismatch(operation, expected, got)
    ($expr:expr, $err_type:ident :: LengthMismatch ( $op:expr, $exp:expr, $got:expr )) => {
        match &$expr {
            Err($err_type::LengthMismatch { operation, expected, got }) => {
                assert_eq!(*operation, $op, "operation 不匹配");
                assert_eq!(*expected, $exp, "expected 不匹配");
                assert_eq!(*got, $got, "got 不匹配");
            }
            Err(e) => panic!(
                "错误类型不匹配：预期 `{}::LengthMismatch`，实际得到 `{:?}`",
                stringify!($err_type), e
            ),
            Ok(v) => panic!(
                "预期 Err({}::LengthMismatch)，实际得到 Ok({:?})",
                stringify!($err_type), v
            ),
        }
    };
    // 简洁语法：VertexOutOfRange(vertex, order)
    ($expr:expr, $err_type:ident :: VertexOutOfRange ( $vertex:expr, $order:expr )) => {
        match &$expr {
            Err($err_type::VertexOutOfRange { vertex, order }) => {
                assert_eq!(*vertex, $vertex, "vertex 不匹配");
                assert_eq!(*order, $order, "order 不匹配");
            }
            Err(e) => panic!(
                "错误类型不匹配：预期 `{}::VertexOutOfRange`，实际得到 `{:?}`",
                stringify!($err_type), e
            ),
            Ok(v) => panic!(
                "预期 Err({}::VertexOutOfRange)，实际得到 Ok({:?})",
                stringify!($err_type), v
            ),
        }
    };
    // 通用模式匹配（带 if guard 或复杂 pattern）
    ($expr:expr, $($pattern:tt)+) => {
        match &$expr {
            Err(e) => assert!(
                matches!(e, $($pattern)+),
                "错误类型不匹配：预期 `{}`，实际得到 `{:?}`",
                stringify!($($pattern)+),
                e
            ),
            Ok(v) => panic!(
                "预期 Err 匹配 `{}`，实际得到 Ok({:?})",
                stringify!($($pattern)+),
                v
            ),
        }
    };
}
