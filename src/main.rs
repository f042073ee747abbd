#![allow(non_snake_case)]
use log::info;
use simplelog::LevelFilter;
use simplelog::*;
use std::collections::HashMap;
use std::rc::Rc;
pub mod symbolic;

use crate::symbolic::symbolic_engine::{BinaryOp, Expr, UnaryFn};

fn main() {
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => info!("symbolic expression demo started"),
        Err(e) => println!("logger was not initialized: {}", e),
    }

    let example = 0;
    match example {
        0 => {
            // SHARED SUB-EXPRESSIONS
            // the same leaf handles foo_a and foo_b appear in several places of one
            // formula: log(a*(a + sin(b)/a + b) - b)
            let foo_a = Expr::constant(2.0).shared();
            let foo_b = Expr::constant(3.0).shared();
            let quotient = Expr::Binary(
                BinaryOp::Div,
                Expr::Unary(UnaryFn::Sin, Rc::clone(&foo_b)).shared(),
                Rc::clone(&foo_a),
            );
            let inner_sum = Expr::Binary(
                BinaryOp::Add,
                Rc::clone(&foo_a),
                Expr::Binary(BinaryOp::Add, quotient.shared(), Rc::clone(&foo_b)).shared(),
            );
            let expr3 = Expr::Unary(
                UnaryFn::Log,
                Expr::Binary(
                    BinaryOp::Sub,
                    Expr::Binary(BinaryOp::Mul, Rc::clone(&foo_a), inner_sum.shared()).shared(),
                    Rc::clone(&foo_b),
                )
                .shared(),
            );
            println!(
                "expr3 = {} expr3.eval() = {}",
                expr3,
                expr3.eval().unwrap()
            );

            let expr4 = Expr::log(Expr::variable("foo"));
            let expr5 = expr4.diff("a");
            let expr6 = expr4.diff("foo");
            println!("expr4 = {}", expr4);
            println!("expr5 = {}", expr5);
            println!("expr6 = {}", expr6);
            // evaluating expr4 must fail: "foo" has no value and there is no binding
            match expr4.eval() {
                Ok(val) => println!("expr4.eval() = {}", val),
                Err(e) => println!("expr4.eval() failed: {}", e),
            }
            // operator sugar over whole trees
            let combined = expr3.clone() + expr4.clone() + expr5 + expr6;
            println!("expr3 + expr4 + expr5 + expr6 = {}", combined);
        }
        1 => {
            // DIFFERENTIATION
            // chain rule for the unary functions, product and quotient rules for
            // the arithmetic nodes; results are returned unsimplified
            let x = Expr::variable("x");
            println!("d/dx sin(x) = {}", Expr::sin(x.clone()).diff("x"));
            println!("d/dx cos(x) = {}", Expr::cos(x.clone()).diff("x"));
            println!("d/dx exp(x) = {}", Expr::exp(x.clone()).diff("x"));
            println!("d/dx log(x) = {}", Expr::log(x.clone()).diff("x"));

            let f = Expr::product(x.clone(), Expr::sin(x.clone()));
            let df_dx = f.diff("x");
            println!("f = {}", f);
            println!("df_dx = {}", df_dx);
            // bind x and evaluate the derivative numerically
            let at_two = df_dx.set_variable("x", 2.0).eval().unwrap();
            info!("df_dx at x = 2 evaluated to {}", at_two);
            println!("df_dx(2) = {}", at_two);
        }
        2 => {
            // FUNCTION OF MULTIPLE VARIABLES
            let vector_of_symbolic_vars = Expr::Symbols("x, y");
            println!("vector_of_symbolic_vars = {:?}", vector_of_symbolic_vars);
            let (x, y) = (
                vector_of_symbolic_vars[0].clone(),
                vector_of_symbolic_vars[1].clone(),
            );
            let symbolic_expression = x.clone() * y.clone() + Expr::sin(x.clone());
            println!("symbolic_expression = {}", symbolic_expression);
            let all = symbolic_expression.all_arguments_are_variables();
            println!("all arguments are variables {:?}", all);
            // partial derivatives with respect to every variable, alphabetical order
            let vector_of_derivatives = symbolic_expression.diff_multi();
            for (var, deriv) in all.iter().zip(vector_of_derivatives.iter()) {
                println!("d/d{} = {}", var, deriv);
            }
            // substitute both variables and evaluate
            let var_map = HashMap::from([("x".to_string(), 1.0), ("y".to_string(), 2.0)]);
            let expression_with_const = symbolic_expression.set_variable_from_map(&var_map);
            println!("expression_with_const = {}", expression_with_const);
            println!("value = {}", expression_with_const.eval().unwrap());
        }
        _ => {
            println!("example not found");
        }
    }
}
