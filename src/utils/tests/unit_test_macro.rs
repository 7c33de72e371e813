use crate::assert_err;
use crate::errors::{AnnError, Operation};

fn length_mismatch() -> Result<(), AnnError> {
    Err(AnnError::LengthMismatch {
        operation: Operation::Feedforward,
        expected: 1,
        got: 2,
    })
}

#[test]
fn test_assert_err_macro() {
    assert_err!(length_mismatch());
    assert_err!(
        length_mismatch(),
        AnnError::LengthMismatch(Operation::Feedforward, 1, 2)
    );
    assert_err!(length_mismatch(), AnnError::LengthMismatch { .. });
    assert_err!(
        length_mismatch(),
        AnnError::LengthMismatch { got, .. } if *got == 2
    );

    let out_of_range: Result<f32, AnnError> =
        Err(AnnError::VertexOutOfRange { vertex: 3, order: 3 });
    assert_err!(out_of_range, AnnError::VertexOutOfRange(3, 3));
}

#[test]
#[should_panic(expected = "错误类型不匹配")]
fn test_assert_err_macro_with_wrong_variant() {
    assert_err!(length_mismatch(), AnnError::EmptyDataset);
}
