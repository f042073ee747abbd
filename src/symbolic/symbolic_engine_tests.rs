//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::{BinaryOp, EvaluationError, Expr, UnaryFn};
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn test_add_assign() {
        let mut expr = Expr::variable("x");
        expr += Expr::constant(2.0);
        let expected = Expr::Binary(
            BinaryOp::Add,
            Expr::Var("x".to_string()).shared(),
            Expr::Const(2.0).shared(),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_sub_assign() {
        let mut expr = Expr::variable("x");
        expr -= Expr::constant(2.0);
        let expected = Expr::Binary(
            BinaryOp::Sub,
            Expr::Var("x".to_string()).shared(),
            Expr::Const(2.0).shared(),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_mul_assign() {
        let mut expr = Expr::variable("x");
        expr *= Expr::constant(2.0);
        let expected = Expr::Binary(
            BinaryOp::Mul,
            Expr::Var("x".to_string()).shared(),
            Expr::Const(2.0).shared(),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_div_assign() {
        let mut expr = Expr::variable("x");
        expr /= Expr::constant(2.0);
        let expected = Expr::Binary(
            BinaryOp::Div,
            Expr::Var("x".to_string()).shared(),
            Expr::Const(2.0).shared(),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg_builds_negation_node() {
        let expr = Expr::variable("x");
        let neg_expr = -expr;
        let expected = Expr::Unary(UnaryFn::Neg, Expr::Var("x".to_string()).shared());
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_combined_operations() {
        let mut expr = Expr::variable("x");
        expr += Expr::constant(2.0);
        expr *= Expr::constant(3.0);
        expr -= Expr::constant(1.0);
        expr /= Expr::constant(2.0);
        let expected = Expr::division(
            Expr::difference(
                Expr::product(
                    Expr::sum(Expr::variable("x"), Expr::constant(2.0)),
                    Expr::constant(3.0),
                ),
                Expr::constant(1.0),
            ),
            Expr::constant(2.0),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_operator_sugar_matches_factories() {
        let by_ops = Expr::variable("x") + Expr::variable("y") * Expr::constant(3.0);
        let by_factories = Expr::sum(
            Expr::variable("x"),
            Expr::product(Expr::variable("y"), Expr::constant(3.0)),
        );
        assert_eq!(by_ops, by_factories);
    }

    #[test]
    fn test_render_is_deterministic() {
        let f = Expr::log(Expr::sum(
            Expr::variable("x"),
            Expr::exp(Expr::variable("y")),
        ));
        let first = f.render();
        let second = f.render();
        assert_eq!(first, second);
        assert_eq!(first, format!("{}", f));
        assert_eq!(first, "log((x + exp(y)))");
    }

    #[test]
    fn test_render_negation_prefix() {
        assert_eq!(Expr::variable("x").neg().render(), "-x");
        let inner = Expr::sum(Expr::variable("x"), Expr::constant(1.0));
        assert_eq!(inner.neg().render(), "-(x + 1)");
    }

    #[test]
    fn test_render_and_eval_log_product() {
        let f = Expr::log(Expr::product(Expr::constant(2.0), Expr::constant(3.0)));
        assert_eq!(f.render(), "log((2 * 3))");
        let val = f.eval().unwrap();
        assert_relative_eq!(val, 6.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(val, 1.791759, epsilon = 1e-6);
    }

    #[test]
    fn test_eval_is_repeatable() {
        let f = Expr::division(
            Expr::sin(Expr::constant(1.5)),
            Expr::sum(Expr::constant(0.1), Expr::exp(Expr::constant(2.0))),
        );
        let first = f.eval().unwrap();
        let second = f.eval().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_eval_fails_on_variable() {
        let result = Expr::variable("x").eval();
        assert_eq!(
            result,
            Err(EvaluationError::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn test_eval_error_propagates_through_parents() {
        let f = Expr::sum(Expr::constant(1.0), Expr::variable("x"));
        assert_eq!(
            f.eval(),
            Err(EvaluationError::UnboundVariable("x".to_string()))
        );
        let g = Expr::log(Expr::product(Expr::constant(2.0), Expr::variable("y")));
        assert_eq!(
            g.eval(),
            Err(EvaluationError::UnboundVariable("y".to_string()))
        );
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let f = Expr::division(Expr::constant(1.0), Expr::constant(0.0));
        assert_eq!(f.eval(), Ok(f64::INFINITY));
        let g = Expr::division(Expr::constant(0.0), Expr::constant(0.0));
        assert!(g.eval().unwrap().is_nan());
    }

    #[test]
    fn test_diff_constant_is_zero() {
        let df = Expr::constant(5.5).diff("x");
        assert_eq!(df.eval(), Ok(0.0));
    }

    #[test]
    fn test_diff_variable() {
        assert_eq!(Expr::variable("x").diff("x").eval(), Ok(1.0));
        assert_eq!(Expr::variable("x").diff("y").eval(), Ok(0.0));
    }

    #[test]
    fn test_diff_sum_of_constants() {
        let f = Expr::sum(Expr::constant(1.0), Expr::constant(2.0));
        assert_eq!(f.diff("x").eval(), Ok(0.0));
    }

    #[test]
    fn test_diff_sin_chain_rule() {
        let df = Expr::sin(Expr::variable("x")).diff("x");
        assert_eq!(df.render(), "(1 * cos(x))");
    }

    #[test]
    fn test_diff_cos_chain_rule() {
        let df = Expr::cos(Expr::variable("x")).diff("x");
        assert_eq!(df.render(), "(1 * -sin(x))");
    }

    #[test]
    fn test_diff_exp_multiplies_by_inner_derivative() {
        let df = Expr::exp(Expr::variable("x")).diff("x");
        let expected = Expr::product(Expr::exp(Expr::variable("x")), Expr::constant(1.0));
        assert_eq!(df, expected);
        assert_relative_eq!(
            df.set_variable("x", 2.0).eval().unwrap(),
            2.0_f64.exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diff_log() {
        let df = Expr::log(Expr::variable("x")).diff("x");
        assert_eq!(df.render(), "(1 / x)");
        assert_eq!(df.set_variable("x", 4.0).eval(), Ok(0.25));
    }

    #[test]
    fn test_diff_neg() {
        let df = Expr::variable("x").neg().diff("x");
        assert_eq!(df.render(), "-1");
        assert_eq!(df.eval(), Ok(-1.0));
    }

    #[test]
    fn test_product_rule() {
        let f = Expr::product(Expr::variable("x"), Expr::variable("x"));
        let df = f.diff("x");
        assert_eq!(df.render(), "((1 * x) + (x * 1))");
        assert_eq!(df.set_variable("x", 3.0).eval(), Ok(6.0));
    }

    #[test]
    fn test_quotient_rule() {
        let f = Expr::division(Expr::constant(1.0), Expr::variable("x"));
        let df = f.diff("x");
        assert_eq!(df.set_variable("x", 2.0).eval(), Ok(-0.25));
    }

    #[test]
    fn test_diff_does_not_mutate_the_source_tree() {
        let f = Expr::product(Expr::variable("x"), Expr::sin(Expr::variable("x")));
        let rendered_before = f.render();
        let _df = f.diff("x");
        assert_eq!(f.render(), rendered_before);
    }

    #[test]
    fn test_derivative_shares_operand_nodes() {
        let x = Expr::variable("x").shared();
        let f = Expr::Unary(UnaryFn::Sin, Rc::clone(&x));
        assert_eq!(Rc::strong_count(&x), 2);
        let df = f.diff("x");
        assert_eq!(Rc::strong_count(&x), 3);
        drop(df);
        assert_eq!(Rc::strong_count(&x), 2);
    }

    #[test]
    fn test_diff_multi() {
        let f = Expr::sum(
            Expr::product(Expr::variable("x"), Expr::variable("y")),
            Expr::sin(Expr::variable("x")),
        );
        let partials = f.diff_multi();
        assert_eq!(partials.len(), 2);
        // alphabetical order: d/dx first, then d/dy
        let mut values = HashMap::new();
        values.insert("x".to_string(), 0.0);
        values.insert("y".to_string(), 5.0);
        let df_dx = partials[0].set_variable_from_map(&values).eval().unwrap();
        assert_relative_eq!(df_dx, 6.0, epsilon = 1e-12);
        let df_dy = partials[1].set_variable_from_map(&values).eval().unwrap();
        assert_relative_eq!(df_dy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_variable() {
        let f = Expr::sum(Expr::variable("x"), Expr::constant(2.0));
        let bound = f.set_variable("x", 3.0);
        assert_eq!(bound.eval(), Ok(5.0));
        // the original keeps its variable
        assert!(f.contains_variable("x"));
    }

    #[test]
    fn test_set_variable_from_map() {
        let f = Expr::sum(
            Expr::product(Expr::variable("x"), Expr::variable("y")),
            Expr::sin(Expr::variable("x")),
        );
        let values = HashMap::from([("x".to_string(), 1.0), ("y".to_string(), 2.0)]);
        let val = f.set_variable_from_map(&values).eval().unwrap();
        assert_relative_eq!(val, 2.0 + 1.0_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let f = Expr::product(
            Expr::variable("y"),
            Expr::sum(Expr::variable("x"), Expr::sin(Expr::variable("x"))),
        );
        assert_eq!(f.all_arguments_are_variables(), vec!["x", "y"]);
        assert!(f.contains_variable("y"));
        assert!(!f.contains_variable("z"));
    }

    #[test]
    fn test_symbols_builder() {
        let vars = Expr::Symbols("a, b, c");
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0].render(), "a");
        assert_eq!(vars[2], Expr::Var("c".to_string()));
    }

    #[test]
    fn test_is_zero() {
        assert!(Expr::constant(0.0).is_zero());
        assert!(!Expr::constant(1.0).is_zero());
        assert!(!Expr::variable("x").is_zero());
    }

    #[test]
    fn test_shared_leaves_across_one_formula() {
        // the same constant handles appear in several places of one tree
        let a = Expr::constant(2.0).shared();
        let b = Expr::constant(3.0).shared();
        let quotient = Expr::Binary(
            BinaryOp::Div,
            Expr::Unary(UnaryFn::Sin, Rc::clone(&b)).shared(),
            Rc::clone(&a),
        );
        let inner_sum = Expr::Binary(
            BinaryOp::Add,
            Rc::clone(&a),
            Expr::Binary(BinaryOp::Add, quotient.shared(), Rc::clone(&b)).shared(),
        );
        let f = Expr::Unary(
            UnaryFn::Log,
            Expr::Binary(
                BinaryOp::Sub,
                Expr::Binary(BinaryOp::Mul, Rc::clone(&a), inner_sum.shared()).shared(),
                Rc::clone(&b),
            )
            .shared(),
        );
        assert_eq!(Rc::strong_count(&a), 4);
        assert_eq!(Rc::strong_count(&b), 4);
        let expected = (2.0 * (2.0 + (3.0_f64.sin() / 2.0 + 3.0)) - 3.0).ln();
        assert_relative_eq!(f.eval().unwrap(), expected, epsilon = 1e-12);
        assert_eq!(
            f.render(),
            "log(((2 * (2 + ((sin(3) / 2) + 3))) - 3))"
        );
    }
}
