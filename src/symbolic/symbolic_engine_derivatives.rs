//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with analytical differentiation and
//! direct numerical evaluation of expression trees. It provides the two
//! structural-recursion algorithms that consume the `Expr` type.
//!
//! ## Purpose
//!
//! This module enables:
//! - **Analytical Differentiation**: symbolic partial derivatives with respect to
//!   a named variable, one calculus rule per node kind, results returned
//!   unsimplified
//! - **Direct Evaluation**: recursive numerical evaluation of variable-free
//!   trees, with an explicit error when a free variable is reached
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff(var: &str)` - analytical partial derivative
//! - `diff_multi()` - all partial derivatives at once
//!
//! ### Function evaluation
//! - `eval()` - direct evaluation without closure creation
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Differentiation Rules**: exhaustive match statements implement
//!    the sum, difference, product, quotient and chain rules for all node kinds
//!
//! 2. **Sub-Expression Sharing**: derivative trees reuse operand nodes of the
//!    source tree through `Rc::clone`, so e.g. the quotient rule references the
//!    denominator twice without copying it
//!
//! 3. **Explicit Evaluation Errors**: `eval` returns a `Result` and propagates
//!    an `EvaluationError` from any depth with the `?` operator instead of
//!    unwinding the stack

use crate::symbolic::symbolic_engine::{BinaryOp, EvaluationError, Expr, UnaryFn};
use std::rc::Rc;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements the standard differentiation rules from calculus:
    /// - Sum rule: d/dx(f + g) = f' + g'
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - g'*f)/(g*g)
    /// - Chain rule: d/dx(f(g(x))) = g'(x)*f'(g(x))
    ///
    /// Always produces a new tree; the receiver and its nodes are never mutated.
    /// Sub-expressions of the receiver are shared into the result by reference
    /// counting, not copied. The result is returned unsimplified: expect factors
    /// of 1 and terms of 0 in the output.
    ///
    /// For multivariable expressions, computes the partial derivative.
    ///
    /// # Arguments
    /// * `var` - Variable name to differentiate with respect to
    ///
    /// # Returns
    /// New symbolic expression representing the derivative
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::variable("x");
    /// let f = Expr::sin(x);
    /// let df_dx = f.diff("x"); // (1 * cos(x))
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Unary(op, operand) => match op {
                UnaryFn::Neg => Expr::Unary(UnaryFn::Neg, operand.diff(var).shared()),
                UnaryFn::Exp => Expr::Binary(
                    BinaryOp::Mul,
                    Expr::Unary(UnaryFn::Exp, Rc::clone(operand)).shared(),
                    operand.diff(var).shared(),
                ),
                UnaryFn::Log => Expr::Binary(
                    BinaryOp::Div,
                    operand.diff(var).shared(),
                    Rc::clone(operand),
                ),
                UnaryFn::Sin => Expr::Binary(
                    BinaryOp::Mul,
                    operand.diff(var).shared(),
                    Expr::Unary(UnaryFn::Cos, Rc::clone(operand)).shared(),
                ),
                UnaryFn::Cos => Expr::Binary(
                    BinaryOp::Mul,
                    operand.diff(var).shared(),
                    Expr::Unary(
                        UnaryFn::Neg,
                        Expr::Unary(UnaryFn::Sin, Rc::clone(operand)).shared(),
                    )
                    .shared(),
                ),
            },
            Expr::Binary(op, lhs, rhs) => match op {
                BinaryOp::Add => Expr::Binary(
                    BinaryOp::Add,
                    lhs.diff(var).shared(),
                    rhs.diff(var).shared(),
                ),
                BinaryOp::Sub => Expr::Binary(
                    BinaryOp::Sub,
                    lhs.diff(var).shared(),
                    rhs.diff(var).shared(),
                ),
                BinaryOp::Mul => Expr::Binary(
                    BinaryOp::Add,
                    Expr::Binary(BinaryOp::Mul, lhs.diff(var).shared(), Rc::clone(rhs)).shared(),
                    Expr::Binary(BinaryOp::Mul, Rc::clone(lhs), rhs.diff(var).shared()).shared(),
                ),
                BinaryOp::Div => Expr::Binary(
                    BinaryOp::Div,
                    Expr::Binary(
                        BinaryOp::Sub,
                        Expr::Binary(BinaryOp::Mul, lhs.diff(var).shared(), Rc::clone(rhs))
                            .shared(),
                        Expr::Binary(BinaryOp::Mul, rhs.diff(var).shared(), Rc::clone(lhs))
                            .shared(),
                    )
                    .shared(),
                    Expr::Binary(BinaryOp::Mul, Rc::clone(rhs), Rc::clone(rhs)).shared(),
                ),
            },
        }
    } // end of diff

    /// Computes all partial derivatives automatically.
    ///
    /// Finds all variables in the expression and computes partial derivatives
    /// with respect to each. Variables are processed in alphabetical order.
    ///
    /// # Returns
    /// Vector of symbolic partial derivative expressions
    pub fn diff_multi(&self) -> Vec<Expr> {
        let all_vars = self.all_arguments_are_variables();
        let vec_of_exprs = all_vars.iter().map(|var| self.diff(var)).collect();
        vec_of_exprs
    }

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression tree into a number.
    ///
    /// Recursively evaluates children, then applies the node's function or
    /// operator. Only variable-free trees evaluate successfully: reaching a
    /// `Var` node anywhere in the subtree produces an
    /// [`EvaluationError::UnboundVariable`] which propagates unchanged to the
    /// caller; no fallback value is substituted. Use `set_variable` or
    /// `set_variable_from_map` first to bind variables.
    ///
    /// Division by zero follows standard floating-point semantics and yields
    /// infinity or NaN, not an error. Evaluation of the same tree is
    /// deterministic: repeated calls return bit-identical results.
    ///
    /// # Returns
    /// Numerical result of expression evaluation, or the error raised at the
    /// first variable reached
    pub fn eval(&self) -> Result<f64, EvaluationError> {
        match self {
            Expr::Const(val) => Ok(*val),
            Expr::Var(name) => Err(EvaluationError::UnboundVariable(name.clone())),
            Expr::Unary(op, operand) => {
                let x = operand.eval()?;
                Ok(match op {
                    UnaryFn::Neg => -x,
                    UnaryFn::Exp => x.exp(),
                    UnaryFn::Log => x.ln(),
                    UnaryFn::Sin => x.sin(),
                    UnaryFn::Cos => x.cos(),
                })
            }
            Expr::Binary(op, lhs, rhs) => {
                let left = lhs.eval()?;
                let right = rhs.eval()?;
                Ok(match op {
                    BinaryOp::Add => left + right,
                    BinaryOp::Sub => left - right,
                    BinaryOp::Mul => left * right,
                    BinaryOp::Div => left / right,
                })
            }
        }
    } // end of eval
}
