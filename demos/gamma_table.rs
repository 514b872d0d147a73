// Regularized lower incomplete gamma over the Boost `gamma_p` diagnostic grid.
// One line per point:
//   { a, z, P(a, z)},
// a = 1.0, 1.4, …, 3.8 and z = 0.05, 0.10, …, 4.00, P with 20 mantissa digits.
// Optional arguments override the grid:
//   cargo run --example gamma_table -- A_START A_STOP A_STEP Z_START Z_STOP Z_STEP DIGITS

use std::io::Write;
use std::process::ExitCode;

use incgamma::table::{tabulate, write_table, Column, Sweep, TableFormat};
use incgamma::IncGamma;

fn parse_args() -> Result<[f64; 7], String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok([1.0, 4.0, 0.4, 0.05, 4.0, 0.05, 20.0]);
    }
    if args.len() != 7 {
        return Err(format!("expected 7 arguments, got {}", args.len()));
    }
    let mut out = [0.0; 7];
    for (slot, arg) in out.iter_mut().zip(&args) {
        *slot = arg.parse().map_err(|e| format!("invalid number {arg:?}: {e}"))?;
    }
    Ok(out)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let [a0, a1, da, z0, z1, dz, digits] = parse_args()?;

    let shapes = Sweep::new(a0, a1, da)?;
    let args = Sweep::new(z0, z1, dz)?;
    let rows = tabulate(&IncGamma::new(), &shapes, &args)?;

    let format = TableFormat {
        shape: Column { width: 4, precision: 1 },
        argument: Column { width: 8, precision: 6 },
        value_digits: digits as usize,
    };
    let mut text = String::new();
    write_table(&mut text, &rows, &format)?;
    std::io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gamma_table: {e}");
            ExitCode::FAILURE
        }
    }
}
