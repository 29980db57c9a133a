//! Arithmetic evaluator for the `calculate` tool.
//!
//! Recursive descent over `+ - * / ( )` and decimal literals, with
//! unary sign, evaluating in f64. Results remember whether division or
//! a decimal literal was involved, which decides how they render.
//! Input reaching this module has already passed the character
//! allowlist, but the parser stands on its own for direct use in
//! tests.

use thiserror::Error;

/// Recursion bound for nested parentheses and unary sign chains.
const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("expression too deeply nested")]
    TooDeep,
}

/// Evaluation result. Integer sums, differences, and products stay
/// integral; any division or decimal literal makes the value a float.
/// The distinction only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Value {
    num: f64,
    is_float: bool,
}

impl Value {
    fn add(self, rhs: Value) -> Value {
        Value {
            num: self.num + rhs.num,
            is_float: self.is_float || rhs.is_float,
        }
    }

    fn sub(self, rhs: Value) -> Value {
        Value {
            num: self.num - rhs.num,
            is_float: self.is_float || rhs.is_float,
        }
    }

    fn mul(self, rhs: Value) -> Value {
        Value {
            num: self.num * rhs.num,
            is_float: self.is_float || rhs.is_float,
        }
    }

    fn div(self, rhs: Value) -> Value {
        Value {
            num: self.num / rhs.num,
            is_float: true,
        }
    }

    fn neg(self) -> Value {
        Value {
            num: -self.num,
            ..self
        }
    }
}

pub(crate) fn evaluate(expression: &str) -> Result<Value, CalcError> {
    let mut parser = Parser {
        input: expression.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = parser.expression()?;
    parser.skip_spaces();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(CalcError::UnexpectedChar(c as char)),
    }
}

/// Render a result: integer arithmetic prints without a decimal point,
/// float results keep one even when whole.
pub(crate) fn format_value(value: Value) -> String {
    if value.num.fract() == 0.0 && value.num.abs() < 1e15 {
        if value.is_float {
            // Debug form keeps the trailing .0 that Display drops.
            format!("{:?}", value.num)
        } else {
            format!("{}", value.num as i64)
        }
    } else {
        value.num.to_string()
    }
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Value, CalcError> {
        let mut value = self.term()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    value = value.add(self.term()?);
                }
                Some(b'-') => {
                    self.pos += 1;
                    value = value.sub(self.term()?);
                }
                _ => return Ok(value),
            }
        }
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Value, CalcError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    value = value.mul(self.factor()?);
                }
                Some(b'/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor.num == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value = value.div(divisor);
                }
                _ => return Ok(value),
            }
        }
    }

    /// factor := ('+' | '-') factor | '(' expression ')' | number
    ///
    /// All recursion passes through here, so the depth check bounds
    /// paren and unary-sign nesting alike.
    fn factor(&mut self) -> Result<Value, CalcError> {
        if self.depth == MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        self.depth += 1;
        let value = self.factor_inner();
        self.depth -= 1;
        value
    }

    fn factor_inner(&mut self) -> Result<Value, CalcError> {
        self.skip_spaces();
        match self.peek() {
            Some(b'+') => {
                self.pos += 1;
                self.factor()
            }
            Some(b'-') => {
                self.pos += 1;
                Ok(self.factor()?.neg())
            }
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_spaces();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(c) => Err(CalcError::UnexpectedChar(c as char)),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            Some(c) => Err(CalcError::UnexpectedChar(c as char)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<Value, CalcError> {
        let start = self.pos;
        let mut saw_dot = false;
        while let Some(c) = self.peek() {
            if c == b'.' {
                saw_dot = true;
                self.pos += 1;
            } else if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }
        let literal = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or_default();
        let num = literal
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(literal.to_string()))?;
        Ok(Value {
            num,
            is_float: saw_dot,
        })
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_with_precedence() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap().num, 14.0);
        assert_eq!(evaluate("2 * 3 + 4").unwrap().num, 10.0);
        assert_eq!(evaluate("10 - 4 / 2").unwrap().num, 8.0);
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(evaluate("(2 + 3) * 4").unwrap().num, 20.0);
        assert_eq!(evaluate("((1 + 1))").unwrap().num, 2.0);
    }

    #[test]
    fn unary_signs_stack() {
        assert_eq!(evaluate("-5 + 3").unwrap().num, -2.0);
        assert_eq!(evaluate("1 + +2").unwrap().num, 3.0);
        assert_eq!(evaluate("--4").unwrap().num, 4.0);
        assert_eq!(evaluate("-(2 + 3)").unwrap().num, -5.0);
    }

    #[test]
    fn decimals_parse() {
        assert_eq!(evaluate("0.5 * 4").unwrap().num, 2.0);
        assert_eq!(evaluate(".5 + .5").unwrap().num, 1.0);
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("5 / (2 - 2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn dangling_operator_fails() {
        assert_eq!(evaluate("1 +"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate(""), Err(CalcError::UnexpectedEnd));
    }

    #[test]
    fn unbalanced_parens_fail() {
        assert_eq!(evaluate("(1 + 2"), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("1 + 2)"), Err(CalcError::UnexpectedChar(')')));
    }

    #[test]
    fn adjacent_values_fail() {
        assert_eq!(evaluate("1 2"), Err(CalcError::UnexpectedChar('2')));
    }

    #[test]
    fn malformed_numbers_fail() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(CalcError::InvalidNumber("1.2.3".to_string()))
        );
        assert_eq!(evaluate("."), Err(CalcError::InvalidNumber(".".to_string())));
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let shallow = format!("{}5{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(evaluate(&shallow).unwrap().num, 5.0);

        let nested = format!("{}1{}", "(".repeat(500), ")".repeat(500));
        assert_eq!(evaluate(&nested), Err(CalcError::TooDeep));

        let signs = format!("{}7", "-".repeat(500));
        assert_eq!(evaluate(&signs), Err(CalcError::TooDeep));
    }

    #[test]
    fn integer_arithmetic_renders_without_decimal() {
        assert_eq!(format_value(evaluate("2 + 2").unwrap()), "4");
        assert_eq!(format_value(evaluate("2 * 3 - 10").unwrap()), "-4");
        assert_eq!(format_value(evaluate("-(2 + 3)").unwrap()), "-5");
    }

    #[test]
    fn division_results_render_as_floats() {
        assert_eq!(format_value(evaluate("4 / 2").unwrap()), "2.0");
        assert_eq!(format_value(evaluate("10 / 4").unwrap()), "2.5");
        assert_eq!(
            format_value(evaluate("1 / 3").unwrap()),
            "0.3333333333333333"
        );
    }

    #[test]
    fn decimal_literals_render_as_floats() {
        assert_eq!(format_value(evaluate("2.5 + 2.5").unwrap()), "5.0");
        assert_eq!(format_value(evaluate("0.5 * 4").unwrap()), "2.0");
    }
}
