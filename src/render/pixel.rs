use rand::Rng;

use crate::config::ArtConfig;
use crate::error::{ArtError, ArtResult};
use crate::network::forward::forward;
use crate::network::model::Model;

/// Half-width of the uniform noise added to each activation before scaling.
pub const NOISE_AMPLITUDE: f64 = 0.03;

/// One pixel's channels, each clamped to [0, 255]. NaN channels become 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Saturating float-to-byte conversion; fractions are truncated.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r as u8, self.g as u8, self.b as u8, self.a as u8]
    }
}

fn channel<R: Rng + ?Sized>(rng: &mut R, activation: f64, max: f64) -> f64 {
    let noisy = activation + rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
    let scaled = noisy * max;
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 255.0)
}

/// Colour of the normalised coordinate `(x, y)`. Alpha is always 255.
pub fn color_at<R: Rng + ?Sized>(
    config: &ArtConfig,
    model: &Model,
    x: f64,
    y: f64,
    rng: &mut R,
) -> ArtResult<Rgba> {
    let out = forward(model, x, y)?;
    if out.shape() != (3, 1) {
        return Err(ArtError::OutputShape { shape: out.shape() });
    }

    Ok(Rgba {
        r: channel(rng, out.data[0], config.max_r),
        g: channel(rng, out.data[1], config.max_g),
        b: channel(rng, out.data[2], config.max_b),
        a: 255.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use crate::network::model::create_model;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A model whose output is sigmoid(`bias`) on every channel.
    fn constant_model(bias: f64) -> Model {
        Model {
            w_in: Matrix::from_vec(1, 3, vec![0.0, 0.0, 1.0]).unwrap(),
            hidden: vec![],
            w_out: Matrix::from_vec(3, 1, vec![bias, bias, bias]).unwrap(),
        }
    }

    #[test]
    fn channels_are_clamped_and_opaque() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = ArtConfig { max_r: 400.0, max_g: -50.0, max_b: 255.0, ..ArtConfig::default() };
        let model = create_model(&config, &mut rng);
        for i in 0..200 {
            let t = i as f64 / 200.0;
            let c = color_at(&config, &model, t, 1.0 - t, &mut rng).unwrap();
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=255.0).contains(&v));
            }
            assert_eq!(c.a, 255.0);
        }
    }

    #[test]
    fn noise_past_saturation_is_clamped() {
        // sigmoid(40) rounds to 1.0, so any positive noise overshoots 255
        let model = constant_model(40.0 / 1.0f64.tanh());
        let config = ArtConfig::default();
        let mut rng = StdRng::seed_from_u64(12);
        let mut saw_clamp = false;
        for _ in 0..100 {
            let c = color_at(&config, &model, 0.5, 0.5, &mut rng).unwrap();
            assert!(c.r <= 255.0 && c.r >= (1.0 - NOISE_AMPLITUDE) * 255.0);
            saw_clamp |= c.r == 255.0;
        }
        assert!(saw_clamp);
    }

    #[test]
    fn noise_is_bounded() {
        let model = constant_model(0.0);
        let config = ArtConfig { max_r: 100.0, max_g: 100.0, max_b: 100.0, ..ArtConfig::default() };
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let c = color_at(&config, &model, 0.0, 0.0, &mut rng).unwrap();
            for v in [c.r, c.g, c.b] {
                assert!(v >= 47.0 - 1e-9 && v < 53.0 + 1e-9, "{v}");
            }
        }
    }

    #[test]
    fn nan_channel_maximum_gives_zero() {
        let model = constant_model(0.0);
        let config = ArtConfig { max_g: f64::NAN, ..ArtConfig::default() };
        let mut rng = StdRng::seed_from_u64(14);
        let c = color_at(&config, &model, 0.2, 0.8, &mut rng).unwrap();
        assert_eq!(c.g, 0.0);
        assert_eq!(c.to_bytes()[1], 0);
    }

    #[test]
    fn output_without_three_channels_is_an_error() {
        let model = Model {
            w_in: Matrix::from_vec(1, 3, vec![0.0, 0.0, 1.0]).unwrap(),
            hidden: vec![],
            w_out: Matrix::from_vec(2, 1, vec![1.0, 1.0]).unwrap(),
        };
        let mut rng = StdRng::seed_from_u64(15);
        assert!(matches!(
            color_at(&ArtConfig::default(), &model, 0.0, 0.0, &mut rng),
            Err(ArtError::OutputShape { shape: (2, 1) })
        ));
    }

    #[test]
    fn to_bytes_truncates() {
        let px = Rgba { r: 254.9, g: 0.2, b: 128.0, a: 255.0 };
        assert_eq!(px.to_bytes(), [254, 0, 128, 255]);
    }
}
