//! Worked examples for the Descend solvers.
//!
//! Each mode solves a small problem and prints the optimized point.
//!
//! # Usage
//!
//! ```text
//! cargo run --example demo -- simplex
//! cargo run --example demo -- exterior
//! cargo run --example demo -- interior
//! cargo run --example demo -- beam
//! RUST_LOG=debug cargo run --example demo -- beam
//! ```
//!
//! # Modes
//!
//! - **simplex** — Minimize the Rosenbrock function with Nelder-Mead from
//!   (−1.2, 1) and report how the best value fell along the trajectory.
//!
//! - **exterior** — Minimize x₁ + 2x₂ inside the ellipse x₁²/4 + x₂² ≤ 1 with an
//!   exterior penalty, approaching (−√2, −√2/2) from outside.
//!
//! - **interior** — The same problem with a log barrier, approaching the
//!   optimum from inside.
//!
//! - **beam** — Size the flange and web thicknesses of an I-beam cantilever for
//!   minimum cross-sectional area under bending and shear stress limits.

use std::error::Error;

use descend_core::ConstrainedProblem;
use descend_solvers::{
    constrained::penalty,
    optimization::{bfgs::Bfgs, nelder_mead},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "simplex".into());
    match mode.as_str() {
        "simplex" => simplex(),
        "exterior" => exterior(),
        "interior" => interior(),
        "beam" => beam(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: demo [simplex|exterior|interior|beam]");
            std::process::exit(1);
        }
    }
}

// --- Simplex -----------------------------------------------------------------

fn simplex() -> Result<(), Box<dyn Error>> {
    let rosenbrock = |x: &[f64; 2]| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2);
    let config = nelder_mead::Config::new(1.0, 1e-6, 1e-6, 1000)?;

    let solution = nelder_mead::minimize_unobserved(&rosenbrock, [-1.2, 1.0], &config)?;

    println!("status: {:?} after {} iterations", solution.status, solution.iters);
    println!("x* = {:?}, f(x*) = {:.3e}", solution.x, solution.value);

    // Every tenth snapshot, to show the descent.
    for (iter, best) in solution.trajectory.best_values().enumerate().step_by(10) {
        println!("  iter {iter:>4}: best f = {best:.6e}");
    }

    Ok(())
}

// --- Ellipse -----------------------------------------------------------------

/// Minimize x₁ + 2x₂ subject to x₁²/4 + x₂² ≤ 1.
struct Ellipse;

impl ConstrainedProblem<2, 1> for Ellipse {
    fn objective(&self, x: &[f64; 2]) -> f64 {
        x[0] + 2.0 * x[1]
    }

    fn gradient(&self, _x: &[f64; 2]) -> [f64; 2] {
        [1.0, 2.0]
    }

    fn inequality(&self, x: &[f64; 2]) -> [f64; 1] {
        [x[0].powi(2) / 4.0 + x[1].powi(2) - 1.0]
    }

    fn inequality_jacobian(&self, x: &[f64; 2]) -> [[f64; 2]; 1] {
        [[x[0] / 2.0, 2.0 * x[1]]]
    }
}

fn exterior() -> Result<(), Box<dyn Error>> {
    let config = penalty::Config::exterior(0.5, 1.8).with_epsilon_g(1e-5);
    let solution = penalty::minimize_unobserved(&Ellipse, [-2.0, -1.0], &config, &mut Bfgs::default())?;

    report("exterior", &solution);
    Ok(())
}

fn interior() -> Result<(), Box<dyn Error>> {
    let config = penalty::Config::interior(3.0, 0.5).with_epsilon_g(1e-6);
    let solution = penalty::minimize_unobserved(&Ellipse, [-1.0, 0.0], &config, &mut Bfgs::default())?;

    report("interior", &solution);
    Ok(())
}

// --- Beam --------------------------------------------------------------------

/// Minimum-area I-beam cantilever with a tip load.
///
/// The variables are the flange thickness `tb` and web thickness `tw`.
/// Flange width `b` and web height `h` are fixed, and the section must keep
/// the bending stress below `sigma_yield` and the shear stress below
/// `tau_yield`.
///
/// Both constraints are written as capacity ratios, `1 − I/I_min ≤ 0` and
/// `1 − tw/tw_min ≤ 0`, rather than as stress ratios. They grow without bound
/// as a thickness goes negative, so the penalized area stays bounded below.
#[derive(Debug, Clone, Copy)]
struct IBeam {
    b: f64,
    h: f64,
    load: f64,
    length: f64,
    sigma_yield: f64,
    tau_yield: f64,
}

impl IBeam {
    /// A 1 m steel cantilever carrying 100 kN.
    fn steel() -> Self {
        Self {
            b: 0.125,
            h: 0.25,
            load: 1e5,
            length: 1.0,
            sigma_yield: 2e8,
            tau_yield: 1.16e8,
        }
    }

    /// Second moment of area and its gradient.
    fn inertia(&self, x: &[f64; 2]) -> (f64, [f64; 2]) {
        let [tb, tw] = *x;
        let (b, h) = (self.b, self.h);

        let inertia = h.powi(3) * tw / 12.0 + b * tb.powi(3) / 6.0 + h * h * b * tb / 2.0;
        let gradient = [b * tb * tb / 2.0 + h * h * b / 2.0, h.powi(3) / 12.0];
        (inertia, gradient)
    }

    /// Smallest second moment that keeps bending stress at yield.
    fn min_inertia(&self) -> f64 {
        self.load * self.length * self.h / (2.0 * self.sigma_yield)
    }

    /// Smallest web thickness that keeps shear stress at yield.
    fn min_web(&self) -> f64 {
        1.5 * self.load / (self.h * self.tau_yield)
    }
}

impl ConstrainedProblem<2, 2> for IBeam {
    fn objective(&self, x: &[f64; 2]) -> f64 {
        2.0 * self.b * x[0] + self.h * x[1]
    }

    fn gradient(&self, _x: &[f64; 2]) -> [f64; 2] {
        [2.0 * self.b, self.h]
    }

    fn inequality(&self, x: &[f64; 2]) -> [f64; 2] {
        let (inertia, _) = self.inertia(x);
        [1.0 - inertia / self.min_inertia(), 1.0 - x[1] / self.min_web()]
    }

    fn inequality_jacobian(&self, x: &[f64; 2]) -> [[f64; 2]; 2] {
        let (_, d_inertia) = self.inertia(x);
        let scale = -1.0 / self.min_inertia();
        [
            [scale * d_inertia[0], scale * d_inertia[1]],
            [0.0, -1.0 / self.min_web()],
        ]
    }
}

fn beam_config() -> penalty::Config {
    penalty::Config {
        max_outer_iters: 200,
        ..penalty::Config::exterior(0.5, 1.1).with_epsilon_g(1e-5)
    }
}

fn beam() -> Result<(), Box<dyn Error>> {
    let solution =
        penalty::minimize_unobserved(&IBeam::steel(), [0.013, 0.004], &beam_config(), &mut Bfgs::default())?;

    report("beam", &solution);
    println!("tb = {:.3} mm, tw = {:.3} mm", solution.x[0] * 1e3, solution.x[1] * 1e3);
    Ok(())
}

fn report<const N: usize>(name: &str, solution: &penalty::Solution<N>) {
    println!("{name}: {:?} after {} outer iterations", solution.status, solution.iters);
    println!(
        "x* = {:?}, f(x*) = {:.6}, violation = {:.3e}",
        solution.x, solution.objective, solution.violation
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn beam_constraints_grow_for_negative_thickness() {
        let beam = IBeam::steel();

        let physical = beam.inequality(&[0.013, 0.004]);
        let negative = beam.inequality(&[-0.013, -0.004]);

        assert!(negative[0] > physical[0]);
        assert!(negative[1] > physical[1]);
        assert!(negative.iter().all(|&g| g > 1.0));
    }

    #[test]
    fn beam_jacobian_matches_finite_difference() {
        let beam = IBeam::steel();
        let x = [0.013, 0.004];
        let h = 1e-9;

        let jacobian = beam.inequality_jacobian(&x);
        for j in 0..2 {
            let mut forward = x;
            let mut backward = x;
            forward[j] += h;
            backward[j] -= h;
            let (gf, gb) = (beam.inequality(&forward), beam.inequality(&backward));
            for i in 0..2 {
                assert_relative_eq!(jacobian[i][j], (gf[i] - gb[i]) / (2.0 * h), max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn beam_converges_to_positive_thicknesses() {
        let beam = IBeam::steel();
        let config = penalty::Config::exterior(0.5, 2.0).with_epsilon_g(1e-4);

        let solution = penalty::minimize_unobserved(&beam, [0.013, 0.004], &config, &mut Bfgs::default())
            .expect("should solve");

        assert!(solution.converged());
        assert!(solution.x.iter().all(|&t| t > 0.0));

        // Both limits are active: the web sits at its shear minimum and the
        // flanges supply the remaining bending stiffness.
        assert_relative_eq!(solution.x[1], beam.min_web(), max_relative = 1e-3);
        assert_relative_eq!(solution.x[0], 0.01426, max_relative = 1e-2);
    }
}
