use tracing::{debug, info};

use crate::interpreter::{ErrorKind, Operator, Value};

/// Fold `op` left to right over `operands`, stopping at the first error.
fn fold(op: &Operator, operands: &[Value]) -> Result<i64, ErrorKind> {
    let (first, rest) = operands.split_first().ok_or(ErrorKind::BadOperator)?;
    let acc = eval(first)?;
    rest.iter().try_fold(acc, |x, operand| {
        let y = eval(operand)?;
        let result = op.apply(x, y);
        debug!("fold / {} {} {} => {:?}", x, op, y, result);
        result
    })
}

fn eval_expression(items: &[Value]) -> Result<i64, ErrorKind> {
    match items {
        [] => Err(ErrorKind::BadOperator),
        [single] => eval(single),
        [Value::Symbol(op), operands @ ..] => fold(op, operands),
        // no operator head: errors among the items still come first
        _ => {
            for item in items {
                eval(item)?;
            }
            Err(ErrorKind::BadOperator)
        }
    }
}

/// Reduce a value to a number, or to the first error met on the way.
///
/// `Number` and `Error` are returned unchanged. A `Symbol` is only meaningful
/// as the head of an expression; anywhere else it is `BadOperator`.
pub fn eval(value: &Value) -> Result<i64, ErrorKind> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(kind) => Err(*kind),
        Value::Symbol(op) => {
            debug!("eval / symbol {} outside operator position", op);
            Err(ErrorKind::BadOperator)
        }
        Value::Expression(items) => {
            let result = eval_expression(items);
            info!("eval / {} => {:?}", value, result);
            result
        }
    }
}

#[cfg(test)]
mod test_eval {
    use super::*;

    fn sym(name: &str) -> Value { Value::symbol(name) }

    fn num(n: i64) -> Value { Value::Number(n) }

    fn list(items: Vec<Value>) -> Value { Value::from_vec(items) }

    #[test]
    fn test_terminal_values_are_idempotent() {
        assert_eq!(eval(&num(5)), Ok(5));
        assert_eq!(eval(&Value::Error(ErrorKind::DivideByZero)), Err(ErrorKind::DivideByZero));
        assert_eq!(num(5).evaluate(), num(5));
        assert_eq!(Value::Error(ErrorKind::BadNumber).evaluate(), Value::Error(ErrorKind::BadNumber));
    }

    #[test]
    fn test_bare_symbol() {
        assert_eq!(eval(&sym("+")), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_fold_left_to_right() {
        // (- 10 3 2) => 5
        assert_eq!(eval(&list(vec![sym("-"), num(10), num(3), num(2)])), Ok(5));
        // (/ 100 5 2) => 10
        assert_eq!(eval(&list(vec![sym("/"), num(100), num(5), num(2)])), Ok(10));
    }

    #[test]
    fn test_single_operand() {
        // (- 5) => 5
        assert_eq!(eval(&list(vec![sym("-"), num(5)])), Ok(5));
    }

    #[test]
    fn test_single_item_expression() {
        // (5) => 5, ((+ 1 2)) => 3
        assert_eq!(eval(&list(vec![num(5)])), Ok(5));
        assert_eq!(eval(&list(vec![list(vec![sym("+"), num(1), num(2)])])), Ok(3));
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(eval(&list(vec![])), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_operator_without_operands() {
        // (+) => BadOperator
        assert_eq!(eval(&list(vec![sym("+")])), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_head_not_symbol() {
        // (1 2 3) => BadOperator
        assert_eq!(eval(&list(vec![num(1), num(2), num(3)])), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_symbol_as_operand() {
        // (+ 1 *) => BadOperator
        assert_eq!(eval(&list(vec![sym("+"), num(1), sym("*")])), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_first_error_wins() {
        // (+ (% 1 0) (^ 1 2)) => DivideByZero
        let v = list(vec![sym("+"), list(vec![sym("%"), num(1), num(0)]), list(vec![sym("^"), num(1), num(2)])]);
        assert_eq!(eval(&v), Err(ErrorKind::DivideByZero));
        // (+ (^ 1 2) (% 1 0)) => BadOperator
        let v = list(vec![sym("+"), list(vec![sym("^"), num(1), num(2)]), list(vec![sym("%"), num(1), num(0)])]);
        assert_eq!(eval(&v), Err(ErrorKind::BadOperator));
    }

    #[test]
    fn test_operand_errors_before_unknown_operator() {
        // (^ 1 (/ 1 0)) => DivideByZero
        let v = list(vec![sym("^"), num(1), list(vec![sym("/"), num(1), num(0)])]);
        assert_eq!(eval(&v), Err(ErrorKind::DivideByZero));
        // (^ (/ 1 0) 2) => DivideByZero
        let v = list(vec![sym("^"), list(vec![sym("/"), num(1), num(0)]), num(2)]);
        assert_eq!(eval(&v), Err(ErrorKind::DivideByZero));
    }

    #[test]
    fn test_unknown_operator_single_operand() {
        // (^ 5) => 5, nothing is combined
        assert_eq!(eval(&list(vec![sym("^"), num(5)])), Ok(5));
    }

    #[test]
    fn test_head_not_symbol_evaluates_items_first() {
        // (1 (/ 1 0)) => DivideByZero
        assert_eq!(eval(&list(vec![num(1), list(vec![sym("/"), num(1), num(0)])])), Err(ErrorKind::DivideByZero));
        // ((/ 1 0) 1) => DivideByZero
        assert_eq!(eval(&list(vec![list(vec![sym("/"), num(1), num(0)]), num(1)])), Err(ErrorKind::DivideByZero));
    }

    #[test]
    fn test_error_operand_propagates_verbatim() {
        // (* 2 <BadNumber> 0) => BadNumber
        let v = list(vec![sym("*"), num(2), Value::Error(ErrorKind::BadNumber), num(0)]);
        assert_eq!(eval(&v), Err(ErrorKind::BadNumber));
    }

    #[test]
    fn test_deep_divide_by_zero() {
        // (+ 1 (* 2 (- 3 (/ 4 0)))) => DivideByZero
        let v = list(vec![
            sym("+"),
            num(1),
            list(vec![sym("*"), num(2), list(vec![sym("-"), num(3), list(vec![sym("/"), num(4), num(0)])])]),
        ]);
        assert_eq!(eval(&v), Err(ErrorKind::DivideByZero));
    }
}
