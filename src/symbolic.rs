#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Symbolic engine
/// a module
/// 1) represents mathematical expressions as immutable trees with shared sub-expressions
/// 2) renders a symbolic expression into a string expression for printing and control of results
/// 3) provides factory constructors and operator sugar for building trees by direct construction
///# Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// // build log(2 * x) bottom-up, no parsing involved
/// let x = Expr::variable("x");
/// let f = Expr::log(Expr::product(Expr::constant(2.0), x.clone()));
/// println!("f = {}", f);
/// assert_eq!(f.render(), "log((2 * x))");
/// // substitute the variable and evaluate the now variable-free tree
/// let value = f.set_variable("x", 3.0).eval().unwrap();
/// assert!((value - 6.0_f64.ln()).abs() < 1e-12);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// # Symbolic derivatives and evaluation
/// a module
/// 1) computes the symbolic (analytical) partial derivative of a tree with respect to a named variable
/// 2) evaluates a variable-free tree into a number, signalling an error when a free variable is reached
///# Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// let x = Expr::variable("x");
/// let f = Expr::sin(x.clone());
/// // d/dx sin(x) = 1 * cos(x), returned unsimplified
/// let df_dx = f.diff("x");
/// println!("df_dx = {}", df_dx);
/// assert_eq!(df_dx.render(), "(1 * cos(x))");
/// // evaluating a tree that still contains a variable is an error
/// assert!(f.eval().is_err());
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine_derivatives;
pub mod symbolic_engine_tests;
