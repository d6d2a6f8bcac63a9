//! # NumeriTrace
//!
//! Numerical methods that return the full record of their computation.
//! Every solver is a pure function from a problem to a [`trace::Trace`]:
//! an ordered list of named intermediate values, from which the final
//! result is read back. Families:
//! - [`LinearSystems`]: Gaussian elimination, Gauss-Jordan, Montante, Gauss-Seidel
//! - [`RootFinding`]: bisection, false position, Newton-Raphson, fixed point, secant
//! - [`Interpolation`]: Lagrange, Newton divided differences, Vandermonde
//! - [`CurveFitting`]: least squares through normal equations
//! - [`Integration`]: Newton-Cotes (closed 1..=10, open 1..=6), trapezoidal
//! - [`InitialValueProblems`]: Euler, Heun, Runge-Kutta 2/3/4, second order pairs
pub mod error;
pub mod functions;
pub mod problem;
pub mod settings;
pub mod trace;
#[allow(non_snake_case)]
pub mod CurveFitting;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod InitialValueProblems;
#[allow(non_snake_case)]
pub mod Integration;
#[allow(non_snake_case)]
pub mod Interpolation;
#[allow(non_snake_case)]
pub mod LinearSystems;
#[allow(non_snake_case)]
pub mod RootFinding;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
