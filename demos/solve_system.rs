use rref::{
    domains::{
        float::RR,
        rational::{Rational, Q},
    },
    tensors::matrix::Matrix,
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

fn solve_float(system: &Matrix<rref::domains::rational::RationalField>) {
    let mut m = system.map(|r| r.to_f64(), RR);
    m.gauss_jordan().unwrap();

    println!("> Row reduced over f64:\n\t{}", m);
}

fn solve_exact(system: &Matrix<rref::domains::rational::RationalField>) {
    let mut m = system.clone();
    m.gauss_jordan().unwrap();

    println!("> Row reduced over Q:\n\t{}", m);

    match m.solution() {
        Some(x) => {
            println!("Solution found");
            for (v, r) in ["x", "y", "z"].iter().zip(&x) {
                println!("\t{} = {} = {}", v, r, r.to_decimal().unwrap());
            }
        }
        None => println!("No solution found"),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RREF_LOG"))
        .init();

    let rows: [[i64; 4]; 3] = [[2, -3, 4, 6], [3, 4, -5, 7], [4, -5, 6, 8]];
    let system = Matrix::from_nested_vec(
        rows.iter()
            .map(|r| r.iter().map(|&x| Rational::from(x)).collect())
            .collect(),
        Q,
    )
    .unwrap();

    println!("> Augmented matrix:\n\t{}", system);

    solve_float(&system);
    solve_exact(&system);
}
