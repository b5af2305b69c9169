use std::f64::consts::E;

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Applies the activation to every element, returning a new matrix.
    pub fn apply(&self, m: &Matrix) -> Matrix {
        m.map(|x| self.function(x))
    }
}

impl Matrix {
    pub fn tanh(&self) -> Matrix {
        ActivationFunction::Tanh.apply(self)
    }

    pub fn sigmoid(&self) -> Matrix {
        ActivationFunction::Sigmoid.apply(self)
    }
}
