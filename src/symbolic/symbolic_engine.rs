//! # Symbolic Engine Module
//!
//! This module provides the core expression-tree representation for creating,
//! manipulating and rendering symbolic mathematical expressions. It is the
//! foundation of the RustedSymDiff crate: differentiation and evaluation build
//! directly on the types defined here.
//!
//! ## Purpose
//!
//! The symbolic engine allows users to:
//! - Build symbolic expressions bottom-up by direct construction (no parsing)
//! - Share one sub-expression node under several parents (DAG, not a strict tree)
//! - Render expressions into a canonical parenthesized string form
//! - Substitute variables with constant values
//! - Inspect which variables occur inside an expression
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Variables**: `Var(String)` - symbolic variables like "x", "y"
//! - **Unary nodes**: `Unary(UnaryFn, Rc<Expr>)` - negation and the functions exp, log, sin, cos
//! - **Binary nodes**: `Binary(BinaryOp, Rc<Expr>, Rc<Expr>)` - basic arithmetic
//!
//! ### Key Methods
//! - `constant(v)`, `variable(name)`, `sin(e)`, `sum(a, b)`, ... - one factory per node kind
//! - `Symbols(symbols: &str)` - create multiple variables from a comma-separated string
//! - `render()` - canonical string form (also available through `Display`)
//! - `set_variable()` / `set_variable_from_map()` - substitute variables with values
//! - `all_arguments_are_variables()` - collect the variable names of a tree
//!
//! ## Interesting Code Features
//!
//! 1. **Reference-Counted Expression Tree**: children are held by `Rc<Expr>`, so the
//!    same sub-expression handle may be reused in several places of one formula
//!    without deep copies; nodes are immutable once constructed
//!
//! 2. **Operator Overloading**: implements std::ops traits (Add, Sub, Mul, Div, Neg)
//!    for natural mathematical syntax: `x + y * z`
//!
//! 3. **Closed Node-Kind Enums**: `UnaryFn` and `BinaryOp` discriminate the node
//!    kinds, so every algorithm is an exhaustive pattern match over four `Expr`
//!    variants instead of a virtual-dispatch hierarchy

use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use strum_macros::Display;
use thiserror::Error;

/// Function applied by a unary node to its single operand.
///
/// `Neg` renders as a `-` prefix; the remaining kinds render as `name(operand)`.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum UnaryFn {
    /// Negation: -x
    #[strum(serialize = "-")]
    Neg,
    /// Exponential function: e^x
    #[strum(serialize = "exp")]
    Exp,
    /// Natural logarithm: log(x)
    #[strum(serialize = "log")]
    Log,
    /// Sine function: sin(x)
    #[strum(serialize = "sin")]
    Sin,
    /// Cosine function: cos(x)
    #[strum(serialize = "cos")]
    Cos,
}

/// Arithmetic operator combining the two children of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum BinaryOp {
    /// Addition operation: left + right
    #[strum(serialize = "+")]
    Add,
    /// Subtraction operation: left - right
    #[strum(serialize = "-")]
    Sub,
    /// Multiplication operation: left * right
    #[strum(serialize = "*")]
    Mul,
    /// Division operation: left / right
    #[strum(serialize = "/")]
    Div,
}

/// Error returned by `eval()` when the tree still contains a free variable.
///
/// Variables carry no numeric value of their own and there is no binding
/// environment inside `eval`; substitute values first with `set_variable`.
/// The failure propagates unchanged to the top-level caller.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("Error trying to evaluate a variable: '{0}' has no numeric value.")]
    UnboundVariable(String),
}

/// Core symbolic expression enum representing mathematical expressions as a tree
/// with reference-counted, possibly shared sub-expressions.
///
/// Nodes are immutable after construction and are built strictly bottom-up, so
/// cycles are structurally impossible. A node's lifetime ends when its last
/// referrer is dropped. Trees may share sub-expression handles: the same
/// `Rc<Expr>` can appear under multiple parents, e.g. the quotient rule reuses
/// the denominator node instead of copying it.
///
/// # Examples
/// ```rust, ignore
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// let x = Expr::variable("x");
/// let expr = Expr::sum(x, Expr::constant(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable with a name (e.g., "x", "y", "velocity")
    Var(String),
    /// Unary node: a function applied to one operand
    Unary(UnaryFn, Rc<Expr>),
    /// Binary node: an arithmetic operator applied to left and right children
    Binary(BinaryOp, Rc<Expr>, Rc<Expr>),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Converts expressions to the canonical parenthesized mathematical notation.
/// Rendering is a pure structural walk: it never evaluates and is always defined.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Unary(UnaryFn::Neg, operand) => write!(f, "-{}", operand),
            Expr::Unary(op, operand) => write!(f, "{}({})", op, operand),
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates a constant node.
    pub fn constant(val: f64) -> Expr {
        Expr::Const(val)
    }

    /// Creates a variable node with the given name.
    pub fn variable(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Convenience method to wrap an expression into Rc for recursive structures.
    ///
    /// Essential for creating nested expressions since Expr variants hold Rc<Expr>.
    /// Cloning the returned handle shares the node instead of copying the subtree.
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Creates negation -(self).
    pub fn neg(mut self) -> Expr {
        self = Expr::Unary(UnaryFn::Neg, self.shared());
        self
    }

    /// Creates exponential function e^(self).
    ///
    /// # Returns
    /// New unary node containing this expression
    pub fn exp(mut self) -> Expr {
        self = Expr::Unary(UnaryFn::Exp, self.shared());
        self
    }

    /// Creates natural logarithm log(self).
    ///
    /// # Returns
    /// New unary node containing this expression
    pub fn log(mut self) -> Expr {
        self = Expr::Unary(UnaryFn::Log, self.shared());
        self
    }

    /// Creates sine sin(self).
    pub fn sin(mut self) -> Expr {
        self = Expr::Unary(UnaryFn::Sin, self.shared());
        self
    }

    /// Creates cosine cos(self).
    pub fn cos(mut self) -> Expr {
        self = Expr::Unary(UnaryFn::Cos, self.shared());
        self
    }

    /// Creates the sum lhs + rhs.
    pub fn sum(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Add, lhs.shared(), rhs.shared())
    }

    /// Creates the difference lhs - rhs.
    pub fn difference(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Sub, lhs.shared(), rhs.shared())
    }

    /// Creates the product lhs * rhs.
    pub fn product(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Mul, lhs.shared(), rhs.shared())
    }

    /// Creates the quotient lhs / rhs.
    pub fn division(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Div, lhs.shared(), rhs.shared())
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing variable names separated by commas and returns
    /// a vector of variable nodes. Whitespace is automatically trimmed.
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated string of variable names (e.g., "x, y, z")
    ///
    /// # Returns
    /// Vector of variable nodes, one for each name
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        let symbols = symbols.to_string();
        let vec_trimmed: Vec<String> = symbols.split(',').map(|s| s.trim().to_string()).collect();
        let vector_of_symbolic_vars: Vec<Expr> = vec_trimmed
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| Expr::variable(s))
            .collect();
        vector_of_symbolic_vars
    }

    /// Produces the canonical parenthesized textual form of the expression.
    ///
    /// Constants render with the default decimal formatting, variables render
    /// their name, unary nodes render as `fn(operand)` (negation as a `-` prefix)
    /// and binary nodes as `(left op right)`. Deterministic: repeated calls on
    /// the same tree produce the same string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Recursively rebuilds the expression tree, replacing all occurrences
    /// of the specified variable with the given constant value. The receiver
    /// is never mutated.
    ///
    /// # Arguments
    /// * `var` - Name of the variable to substitute
    /// * `value` - Numerical value to substitute for the variable
    ///
    /// # Returns
    /// New expression with the variable substituted
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Unary(op, operand) => {
                Expr::Unary(*op, operand.set_variable(var, value).shared())
            }
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                lhs.set_variable(var, value).shared(),
                rhs.set_variable(var, value).shared(),
            ),
        }
    }

    /// Substitutes multiple variables with constant values using a HashMap.
    ///
    /// More efficient than multiple set_variable calls when substituting many
    /// variables. Only variables present in the map are substituted.
    ///
    /// # Arguments
    /// * `var_map` - HashMap mapping variable names to their replacement values
    ///
    /// # Returns
    /// New expression with all mapped variables substituted
    pub fn set_variable_from_map(&self, var_map: &HashMap<String, f64>) -> Expr {
        match self {
            Expr::Var(name) if var_map.contains_key(name) => Expr::Const(var_map[name]),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Unary(op, operand) => {
                Expr::Unary(*op, operand.set_variable_from_map(var_map).shared())
            }
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                lhs.set_variable_from_map(var_map).shared(),
                rhs.set_variable_from_map(var_map).shared(),
            ),
        }
    }

    /// Extracts all unique variable names from the symbolic expression.
    ///
    /// Recursively traverses the expression tree to collect all symbolic
    /// variables. Returns a sorted, deduplicated list of variable names.
    ///
    /// # Returns
    /// Vector of unique variable names in alphabetical order
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::sum(Expr::variable("y"), Expr::variable("x"));
    /// let vars = expr.all_arguments_are_variables();
    /// assert_eq!(vars, vec!["x", "y"]);
    /// ```
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Unary(_, operand) => {
                vars.extend(operand.all_arguments_are_variables());
            }
            Expr::Binary(_, lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
        }
        vars.into_iter().sorted().dedup().collect()
    } // end of all_arguments_are_variables

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Unary(_, operand) => operand.contains_variable(var_name),
            Expr::Binary(_, lhs, rhs) => {
                lhs.contains_variable(var_name) || rhs.contains_variable(var_name)
            }
        }
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Add, self.shared(), rhs.shared())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Sub, self.shared(), rhs.shared())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Mul, self.shared(), rhs.shared())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Div, self.shared(), rhs.shared())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Unary(UnaryFn::Neg, self.shared())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinaryOp::Add, self.clone().shared(), rhs.shared());
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinaryOp::Sub, self.clone().shared(), rhs.shared());
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinaryOp::Mul, self.clone().shared(), rhs.shared());
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Binary(BinaryOp::Div, self.clone().shared(), rhs.shared());
    }
}
