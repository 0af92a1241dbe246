//! Dense real-valued matrices with row-major storage
//!
//! The motion model only needs construction, indexing, `+` and `*`.  The rest
//! of the algebra (`get`, `try_sub_assign`, `try_mul_assign`, and
//! `read_values`) rounds out the API and is exercised by the tests here.
use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Matrix {
    rows: usize,
    cols: usize,
    /// Elements in row-major order; always `rows * cols` long
    values: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix with `rows` rows and `cols` columns
    pub(crate) fn new(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix with `rows` rows and `cols` columns from a list of
    /// values in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not `rows * cols`.
    pub(crate) fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Matrix {
        assert_eq!(
            values.len(),
            rows * cols,
            "a {rows}x{cols} matrix needs exactly {} values",
            rows * cols
        );
        Matrix { rows, cols, values }
    }

    /// Create a column vector (an `n`×1 matrix)
    pub(crate) fn column(values: &[f64]) -> Matrix {
        Matrix::from_values(values.len(), 1, values.to_vec())
    }

    pub(crate) fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Return the element at (`row`, `col`), or `None` if either is out of
    /// range
    #[allow(unused)]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.offset(row, col).map(|i| self.values[i])
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| self.cols * row + col)
    }

    fn checked_offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows,
            "row {row} out of bounds for {} matrix",
            self.shape()
        );
        assert!(
            col < self.cols,
            "column {col} out of bounds for {} matrix",
            self.shape()
        );
        self.cols * row + col
    }

    /// Element-wise sum of `self` and `rhs`
    pub(crate) fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, Operation::Add, |a, b| a + b)
    }

    /// Element-wise difference of `self` and `rhs`
    pub(crate) fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, Operation::Subtract, |a, b| a - b)
    }

    /// Matrix product `self × rhs`.  `self` must have as many columns as
    /// `rhs` has rows.
    pub(crate) fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::mismatch(Operation::Multiply, self, rhs));
        }
        let mut product = Matrix::new(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                product[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        Ok(product)
    }

    /// Replace `self` with `self + rhs`.  On error, `self` is unchanged.
    pub(crate) fn try_add_assign(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// Replace `self` with `self - rhs`.  On error, `self` is unchanged.
    #[allow(unused)]
    pub(crate) fn try_sub_assign(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// Replace `self` with `self × rhs`.  On error, `self` is unchanged.
    #[allow(unused)]
    pub(crate) fn try_mul_assign(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    /// Overwrite the elements of `self`, in row-major order, with the
    /// whitespace-separated numbers in `s`.  The dimensions of `self` are not
    /// changed, and `s` must contain exactly `rows * cols` numbers.  On error,
    /// `self` is unchanged.
    #[allow(unused)]
    pub(crate) fn read_values(&mut self, s: &str) -> Result<(), ParseMatrixError> {
        let expected = self.values.len();
        let mut values = Vec::with_capacity(expected);
        for word in s.split_whitespace() {
            if values.len() == expected {
                return Err(ParseMatrixError::TooManyValues { expected });
            }
            let v = word
                .parse::<f64>()
                .map_err(|source| ParseMatrixError::InvalidValue {
                    value: word.to_owned(),
                    source,
                })?;
            values.push(v);
        }
        if values.len() < expected {
            return Err(ParseMatrixError::TooFewValues {
                expected,
                found: values.len(),
            });
        }
        self.values = values;
        Ok(())
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: Operation, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::mismatch(op, self, rhs));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            values: self
                .values
                .iter()
                .zip(&rhs.values)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.values[self.checked_offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let i = self.checked_offset(row, col);
        &mut self.values[i]
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.checked_mul(rhs)
    }
}

/// Writes one line per row, with the elements of each row separated by single
/// spaces
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.values.chunks(self.cols) {
            let mut first = true;
            for v in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The dimensions of a matrix
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Shape {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        f.pad(name)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum MatrixError {
    #[error("cannot {op} a {lhs} matrix and a {rhs} matrix")]
    DimensionMismatch {
        op: Operation,
        lhs: Shape,
        rhs: Shape,
    },
}

impl MatrixError {
    fn mismatch(op: Operation, lhs: &Matrix, rhs: &Matrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseMatrixError {
    #[error("expected {expected} values, found only {found}")]
    TooFewValues { expected: usize, found: usize },
    #[error("expected {expected} values, found more")]
    TooManyValues { expected: usize },
    #[error("invalid matrix element {value:?}")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn two_by_three() -> Matrix {
        Matrix::from_values(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(2, 2);
        assert_eq!(m, Matrix::from_values(2, 2, vec![0.0; 4]));
        assert_eq!(m.shape(), Shape { rows: 2, cols: 2 });
    }

    #[test]
    fn index_is_row_major() {
        let mut m = two_by_three();
        assert_eq!(m.get(0, 2), Some(3.0));
        assert_eq!(m.get(1, 0), Some(4.0));
        m[(1, 2)] = 9.5;
        assert_eq!(m, Matrix::from_values(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 9.5]));
    }

    #[rstest]
    #[case(2, 0)]
    #[case(0, 3)]
    #[case(5, 5)]
    fn get_out_of_range(#[case] row: usize, #[case] col: usize) {
        assert_eq!(two_by_three().get(row, col), None);
    }

    #[test]
    #[should_panic(expected = "row 2 out of bounds for 2x3 matrix")]
    fn index_row_out_of_range() {
        let m = two_by_three();
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "column 3 out of bounds for 2x3 matrix")]
    fn index_col_out_of_range() {
        let mut m = two_by_three();
        m[(0, 3)] = 1.0;
    }

    #[test]
    #[should_panic(expected = "a 2x2 matrix needs exactly 4 values")]
    fn from_values_wrong_length() {
        let _ = Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn add_and_sub() {
        let a = two_by_three();
        let b = Matrix::from_values(2, 3, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(&a + &b, Ok(Matrix::from_values(2, 3, vec![7.0; 6])));
        assert_eq!(
            &a - &b,
            Ok(Matrix::from_values(
                2,
                3,
                vec![-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]
            ))
        );
    }

    #[test]
    fn add_mismatch() {
        let a = two_by_three();
        let b = Matrix::new(3, 2);
        let e = (&a + &b).unwrap_err();
        assert_eq!(
            e,
            MatrixError::DimensionMismatch {
                op: Operation::Add,
                lhs: Shape { rows: 2, cols: 3 },
                rhs: Shape { rows: 3, cols: 2 },
            }
        );
        assert_eq!(e.to_string(), "cannot add a 2x3 matrix and a 3x2 matrix");
    }

    #[test]
    fn sub_mismatch() {
        let e = (&Matrix::new(1, 1) - &Matrix::new(1, 2)).unwrap_err();
        assert_eq!(
            e.to_string(),
            "cannot subtract a 1x1 matrix and a 1x2 matrix"
        );
    }

    #[test]
    fn multiply() {
        let a = two_by_three();
        let b = Matrix::from_values(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        assert_eq!(
            &a * &b,
            Ok(Matrix::from_values(2, 2, vec![58.0, 64.0, 139.0, 154.0]))
        );
    }

    #[test]
    fn multiply_column() {
        let scale = Matrix::from_values(2, 2, vec![2.0, 0.0, 0.0, 3.0]);
        let v = Matrix::column(&[1.0, 1.0]);
        assert_eq!(&scale * &v, Ok(Matrix::column(&[2.0, 3.0])));
    }

    #[test]
    fn multiply_mismatch() {
        let a = two_by_three();
        let e = (&a * &a).unwrap_err();
        assert_eq!(
            e.to_string(),
            "cannot multiply a 2x3 matrix and a 2x3 matrix"
        );
    }

    #[test]
    fn compound_assignment() {
        let mut m = Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let identity = Matrix::from_values(2, 2, vec![1.0, 0.0, 0.0, 1.0]);
        m.try_add_assign(&identity).unwrap();
        assert_eq!(m, Matrix::from_values(2, 2, vec![2.0, 2.0, 3.0, 5.0]));
        m.try_sub_assign(&identity).unwrap();
        assert_eq!(m, Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]));
        m.try_mul_assign(&m.clone()).unwrap();
        assert_eq!(m, Matrix::from_values(2, 2, vec![7.0, 10.0, 15.0, 22.0]));
    }

    #[test]
    fn failed_compound_assignment_leaves_matrix_alone() {
        let mut m = two_by_three();
        assert!(m.try_mul_assign(&two_by_three()).is_err());
        assert_eq!(m, two_by_three());
    }

    #[test]
    fn display() {
        let m = Matrix::from_values(2, 3, vec![1.0, -2.5, 3.0, 0.0, 5.0, 6.25]);
        assert_eq!(m.to_string(), "1 -2.5 3\n0 5 6.25\n");
    }

    #[test]
    fn read_values_from_display_output() {
        let m = Matrix::from_values(2, 3, vec![1.0, -2.5, 3.0, 0.0, 5.0, 6.25]);
        let mut parsed = Matrix::new(2, 3);
        parsed.read_values(&m.to_string()).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn read_values_does_not_reshape() {
        let mut m = Matrix::new(3, 2);
        m.read_values("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(m.shape(), Shape { rows: 3, cols: 2 });
        assert_eq!(m.get(1, 0), Some(3.0));
    }

    #[rstest]
    #[case("1 2 3", ParseMatrixError::TooFewValues { expected: 4, found: 3 })]
    #[case("1 2 3 4 5", ParseMatrixError::TooManyValues { expected: 4 })]
    fn read_values_wrong_count(#[case] s: &str, #[case] err: ParseMatrixError) {
        let mut m = Matrix::new(2, 2);
        assert_eq!(m.read_values(s), Err(err));
        assert_eq!(m, Matrix::new(2, 2));
    }

    #[test]
    fn read_values_invalid() {
        let mut m = Matrix::new(1, 2);
        let e = m.read_values("1 two").unwrap_err();
        assert!(matches!(e, ParseMatrixError::InvalidValue { ref value, .. } if value == "two"));
    }
}
