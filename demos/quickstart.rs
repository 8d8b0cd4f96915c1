//! Centella Quick Start
//!
//! Demonstrates the core vector API in a single file.
//! Run with: cargo run --example quickstart

use centella::{Result, Vector};

fn main() -> Result<()> {
    println!("=== Centella Quick Start ===\n");

    let v1 = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let v2 = Vector::from_slice(&[-1.0, -2.0, -3.0, -4.0]);

    // 1. Statistics
    println!("1. Statistics");
    println!("   min(v1)  = {}", v1.min()?);
    println!("   max(v1)  = {}", v1.max()?);
    println!("   mean(v1) = {}", v1.mean()?);
    println!("   var(v1)  = {}", v1.variance()?);
    println!("   std(v1)  = {}", v1.std_dev()?);
    println!();

    // 2. Rendering
    println!("2. Rendering");
    println!("   v1 = {}", v1);
    println!("   v2 = {}", v2);
    let long = Vector::from_slice(&(1..=20).map(f64::from).collect::<Vec<_>>());
    println!("   long = {}", long);
    println!();

    // 3. Elementwise arithmetic
    println!("3. Elementwise arithmetic");
    println!("   v1 + v2 = {}", v1.add(&v2)?);
    println!("   v1 - v2 = {}", v1.sub(&v2)?);
    println!("   v1 * v2 = {}", v1.mul(&v2)?);
    println!();

    // 4. Scalar broadcasts
    println!("4. Scalar broadcasts");
    println!("   v1 + 2 = {}", v1.add_scalar(2.0));
    println!("   v1 * 3 = {}", v1.mul_scalar(3.0));

    Ok(())
}
