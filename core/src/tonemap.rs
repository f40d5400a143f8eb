use crate::{interval::Interval, vec3::Color};

/// Gamma-2 encode (square root) and quantize a linear color to 8-bit RGB.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0., 0.999);
    let gamma = |c: f64| if c > 0. { c.sqrt() } else { 0. };

    [
        (256. * intensity.clamp(gamma(color.x))) as u8,
        (256. * intensity.clamp(gamma(color.y))) as u8,
        (256. * intensity.clamp(gamma(color.z))) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_maps_to_zero() {
        assert_eq!(to_rgb8(Color::ZERO), [0, 0, 0]);
    }

    #[test]
    fn full_white_maps_to_max_byte() {
        assert_eq!(to_rgb8(Color::ONE), [255, 255, 255]);
    }

    #[test]
    fn negative_linear_values_clamp_to_zero() {
        assert_eq!(to_rgb8(Color::new(-1., -1., -1.)), [0, 0, 0]);
    }

    #[test]
    fn out_of_range_high_values_clamp_at_intensity_ceiling() {
        let [r, g, b] = to_rgb8(Color::new(100., 100., 100.));
        assert_eq!((r, g, b), (255, 255, 255));
    }

    #[test]
    fn midtone_applies_gamma_before_quantizing() {
        let [r, _, _] = to_rgb8(Color::new(0.25, 0., 0.));
        assert_eq!(r, (256. * 0.5) as u8);
    }

    #[test]
    fn byte_quantization_round_trips_within_one_quantum() {
        let mut c = 0.001;
        while c <= 0.999 {
            let [r, _, _] = to_rgb8(Color::new(c, 0., 0.));
            let recovered = (r as f64 / 256.).powi(2);
            assert!((recovered - c).abs() < 0.02, "c={c}, recovered={recovered}");
            c += 0.01;
        }
    }
}
