use RustedSymDiff::symbolic::symbolic_engine::Expr;
use criterion::{Criterion, criterion_group, criterion_main};

// deeply nested one-variable expression: sin(x)*x + exp(x/(x+1)) repeated
fn build_nested(depth: usize) -> Expr {
    let x = Expr::variable("x");
    let mut expr = Expr::sin(x.clone()) * x.clone();
    for _ in 0..depth {
        expr = expr.clone() + Expr::exp(x.clone() / (x.clone() + Expr::constant(1.0)));
        expr = Expr::log(expr) * Expr::cos(x.clone());
    }
    expr
}

fn bench_diff(c: &mut Criterion) {
    let expr = build_nested(6);
    c.bench_function("diff nested expression", |b| b.iter(|| expr.diff("x")));
}

fn bench_eval(c: &mut Criterion) {
    let expr = build_nested(6).set_variable("x", 0.5);
    c.bench_function("eval nested expression", |b| b.iter(|| expr.eval()));
}

fn bench_render(c: &mut Criterion) {
    let expr = build_nested(6);
    c.bench_function("render nested expression", |b| b.iter(|| expr.render()));
}

criterion_group!(benches, bench_diff, bench_eval, bench_render);
criterion_main!(benches);
