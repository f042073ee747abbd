use RustedSymDiff::symbolic::symbolic_engine::Expr;

fn main() {
    // BUILDING TREES BY DIRECT CONSTRUCTION (no parsing)
    // f = log(2 * x) built bottom-up from factory constructors
    let x = Expr::variable("x");
    let f = Expr::log(Expr::product(Expr::constant(2.0), x.clone()));
    println!("f = {}", f);

    // the same tree through operator sugar
    let g = Expr::constant(2.0) * x.clone();
    println!("g = {}", g.render());

    // a tree that still contains a variable cannot be evaluated
    match f.eval() {
        Ok(val) => println!("f.eval() = {}", val),
        Err(e) => println!("f.eval() failed: {}", e),
    }

    // substitute the variable with a constant, then evaluate
    let bound = f.set_variable("x", 3.0);
    println!("bound = {}", bound);
    println!("bound.eval() = {}", bound.eval().unwrap());

    // division by zero is not an error: IEEE semantics apply
    let q = Expr::division(Expr::constant(1.0), Expr::constant(0.0));
    println!("{} = {}", q, q.eval().unwrap());
}
