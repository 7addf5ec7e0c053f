use edit_align::CostMatrix;

#[cfg(test)]
mod cost_matrix_tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_dimensions() {
        let matrix = CostMatrix::build(&chars("abc"), &chars("abcde"));

        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 6);
    }

    #[test]
    fn test_boundary_rows_and_columns() {
        let reference = chars("kitten");
        let hypothesis = chars("sitting");
        let matrix = CostMatrix::build(&reference, &hypothesis);

        for i in 0..matrix.rows() {
            assert_eq!(matrix.cost(i, 0), i);
        }

        for j in 0..matrix.cols() {
            assert_eq!(matrix.cost(0, j), j);
        }
    }

    #[test]
    fn test_recurrence_holds_for_every_cell() {
        let reference = chars("intention");
        let hypothesis = chars("execution");
        let matrix = CostMatrix::build(&reference, &hypothesis);

        for i in 1..matrix.rows() {
            for j in 1..matrix.cols() {
                let substitution_cost = if reference[i - 1] == hypothesis[j - 1] {
                    0
                } else {
                    1
                };
                let expected = (matrix.cost(i - 1, j - 1) + substitution_cost)
                    .min(matrix.cost(i - 1, j) + 1)
                    .min(matrix.cost(i, j - 1) + 1);

                assert_eq!(matrix.cost(i, j), expected, "cell ({}, {})", i, j);
            }
        }

        assert_eq!(matrix.distance(), 5);
    }

    #[test]
    fn test_empty_reference() {
        let matrix = CostMatrix::build(&[], &chars("abcd"));

        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.distance(), 4);
    }

    #[test]
    fn test_empty_hypothesis() {
        let matrix = CostMatrix::build(&chars("abc"), &[]);

        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.distance(), 3);
    }

    #[test]
    fn test_both_empty() {
        let matrix = CostMatrix::build::<char>(&[], &[]);

        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.distance(), 0);
    }

    #[test]
    fn test_word_tokens() {
        let reference = vec!["the", "cat", "sat", "on", "the", "mat"];
        let hypothesis = vec!["the", "cat", "sat", "on", "a", "mat"];

        assert_eq!(CostMatrix::build(&reference, &hypothesis).distance(), 1);
    }

    #[test]
    #[should_panic]
    fn test_cost_outside_matrix_panics() {
        let matrix = CostMatrix::build(&chars("ab"), &chars("ab"));

        matrix.cost(3, 0);
    }
}
