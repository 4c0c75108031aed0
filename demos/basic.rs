use boys_function::*;

fn main() {
    let t = 1.0_f64;

    // -- Single values --
    println!("=== Single values (f64) ===");
    for m in 0..3 {
        let f = boys(m, t).unwrap();
        println!("F_{m}({t}) = {f}");
    }

    // -- Sequence computation --
    println!("\n=== Sequence: F_0 .. F_6 at t = 7.5 ===");
    let seq = boys_seq(6, 7.5).unwrap();
    for (m, val) in seq.values.iter().enumerate() {
        println!("  F_{m}(7.5) = {val:e}");
    }
    println!("  regime: {:?}", seq.regime);

    // -- Extended precision --
    println!("\n=== Double-double ===");
    let seq = boys_seq(2, DoubleDouble::from(t)).unwrap();
    for (m, val) in seq.values.iter().enumerate() {
        println!("  F_{m}({t}) = {:.17} + {:e}", val.hi, val.lo);
    }

    // -- Range-limited --
    println!("\n=== Range-limited, lower = 0.5 ===");
    let seq = boys_range_seq(3, 2.0, 0.5).unwrap();
    for (m, val) in seq.values.iter().enumerate() {
        println!("  ∫_0.5^1 u^{} e^(-2u²) du = {val}", 2 * m);
    }
    println!("  regime: {:?}", seq.regime);

    // -- No allocation --
    println!("\n=== Caller-owned buffer ===");
    let mut buf = [0.0_f64; 4];
    let regime = boys_into(12.0, &mut buf).unwrap();
    println!("  {buf:?} ({regime:?})");

    // -- Errors --
    println!("\n=== Errors ===");
    println!("  boys(0, -1.0): {}", boys(0, -1.0_f64).unwrap_err());
    println!("  boys_range(0, 1.0, 1.5): {}", boys_range(0, 1.0, 1.5_f64).unwrap_err());
}
