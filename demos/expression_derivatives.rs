use RustedSymDiff::symbolic::symbolic_engine::Expr;
use std::collections::HashMap;

fn main() {
    // SYMBOLIC DIFFERENTIATION
    // derivatives are new trees, returned unsimplified
    let x = Expr::variable("x");
    let f = Expr::product(x.clone(), Expr::exp(x.clone()));
    let df_dx = f.diff("x");
    println!("f = {}", f);
    println!("df_dx = {}", df_dx);

    // evaluate the derivative at a point
    let at_one = df_dx.set_variable("x", 1.0).eval().unwrap();
    println!("df_dx(1) = {}", at_one);

    // partial derivatives of a function of several variables
    let vars = Expr::Symbols("x, y");
    let (x, y) = (vars[0].clone(), vars[1].clone());
    let h = x.clone() * y.clone() + Expr::cos(x.clone());
    for (name, partial) in h
        .all_arguments_are_variables()
        .iter()
        .zip(h.diff_multi().iter())
    {
        println!("dh/d{} = {}", name, partial);
    }

    let var_map = HashMap::from([("x".to_string(), 0.5), ("y".to_string(), 2.0)]);
    let value = h.set_variable_from_map(&var_map).eval().unwrap();
    println!("h(0.5, 2) = {}", value);
}
