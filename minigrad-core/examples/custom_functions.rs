//! Builds a few expressions with the built-in operations and the reference custom
//! functions, then prints values and gradients.
//!
//! Run with `cargo run -p minigrad-core --example custom_functions`.

use minigrad_core::functions::{axpy, clamp01, mul_add, square};
use minigrad_core::{MiniGradError, Tensor};

fn main() -> Result<(), MiniGradError> {
    let x = Tensor::new(2.0, true).with_name("x");
    let y = (&x + 3.0) * 2.0;
    println!("(x + 3) * 2 = {}", y);

    let s = square(&x)?;
    s.backward()?;
    println!("square(x) = {}  ->  {}", s.value(), x);

    let a = Tensor::new(2.0, true).with_name("a");
    let v = Tensor::new(3.0, true).with_name("v");
    let b = Tensor::new(1.0, true).with_name("b");
    let out = axpy(&a, &v, &b)?;
    out.backward()?;
    println!("axpy(a, v, b) = {}", out.value());
    for t in [&a, &v, &b] {
        println!("  {}", t);
    }

    let c = Tensor::new(0.5, true).with_name("c");
    let clamped = clamp01(&c)?;
    clamped.backward()?;
    println!("clamp01(c) = {}  ->  {}", clamped.value(), c);

    let p = Tensor::new(1.5, true).with_name("p");
    let fused = mul_add(&p, &p, 1.0)?.relu().exp().sin();
    fused.backward()?;
    println!("sin(exp(relu(p * p + 1))) = {}  ->  {}", fused.value(), p);

    Ok(())
}
