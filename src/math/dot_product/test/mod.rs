//! Tests for the dot product strategies.

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::math::dot_product::bench::{measure_once, portable_fallback_warning, run_sweep};
    use crate::math::dot_product::code::*;
    use crate::utils::bench::{input_rng, sweep_sizes, ConstantFloats, InputSource, UniformInts};
    use approx::assert_relative_eq;

    fn to_f32(values: &[i32]) -> Vec<f32> {
        values.iter().map(|&v| v as f32).collect()
    }

    fn all_three(a: &[i32], b: &[i32]) -> (f64, f64, f64) {
        let scalar = Scalar.dot(a, b).unwrap();
        let wide = WideAvx.dot(a, b).unwrap();
        let narrow = NarrowDpps.dot(&to_f32(a), &to_f32(b)).unwrap();
        (scalar, wide, narrow)
    }

    #[test]
    fn test_scalar_basic() {
        assert_eq!(Scalar.dot(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]).unwrap(), 35.0);
    }

    #[test]
    fn test_all_strategies_basic() {
        let (scalar, wide, narrow) = all_three(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]);
        assert_eq!(scalar, 35.0);
        assert_relative_eq!(wide, 35.0, max_relative = 1e-6);
        assert_relative_eq!(narrow, 35.0, max_relative = 1e-6);
    }

    #[test]
    fn test_one_vector_step_plus_tail() {
        let (scalar, wide, narrow) = all_three(&[1; 9], &[2; 9]);
        assert_eq!(scalar, 18.0);
        assert_eq!(wide, 18.0);
        assert_eq!(narrow, 18.0);
    }

    #[test]
    fn test_empty() {
        let (scalar, wide, narrow) = all_three(&[], &[]);
        assert_eq!(scalar, 0.0);
        assert_eq!(wide, 0.0);
        assert_eq!(narrow, 0.0);
    }

    #[test]
    fn test_below_lane_width_matches_scalar_exactly() {
        let mut rng = input_rng(Some(3));
        let (a, b) = UniformInts::default().generate_pair(8, &mut rng);
        for len in 1..WideAvx::LANES {
            let expected = Scalar.dot(&a[..len], &b[..len]).unwrap();
            assert_eq!(WideAvx.dot(&a[..len], &b[..len]).unwrap(), expected, "len {}", len);
        }
        for len in 1..NarrowDpps::LANES {
            let expected = Scalar.dot(&a[..len], &b[..len]).unwrap();
            let narrow = NarrowDpps
                .dot(&to_f32(&a[..len]), &to_f32(&b[..len]))
                .unwrap();
            assert_eq!(narrow, expected, "len {}", len);
        }
    }

    #[test]
    fn test_lane_aligned_sizes_have_no_tail() {
        for len in [8, 16, 24] {
            let split = LaneSplit::new(len, WideAvx::LANES);
            assert_eq!(split.tail, 0);
            assert_eq!(split.chunks, len / 8);
        }
        for len in [4, 8, 12] {
            let split = LaneSplit::new(len, NarrowDpps::LANES);
            assert_eq!(split.tail, 0);
            assert_eq!(split.chunks, len / 4);
        }
        assert_eq!(LaneSplit::new(9, 8).tail, 1);
        assert_eq!(LaneSplit::new(15, 4).tail, 3);
    }

    #[test]
    fn test_boundary_sizes() {
        // Distinct values per position so a dropped or doubled element shows up
        let a: Vec<i32> = (1..=25).collect();
        let b: Vec<i32> = (1..=25).rev().collect();
        for len in [4, 7, 8, 9, 12, 15, 16, 17, 23, 24, 25] {
            let (scalar, wide, narrow) = all_three(&a[..len], &b[..len]);
            assert_eq!(wide, scalar, "wide, len {}", len);
            assert_eq!(narrow, scalar, "narrow, len {}", len);
        }
    }

    #[test]
    fn test_strategies_agree_on_random_inputs() {
        let mut rng = input_rng(Some(0xD07));
        for size in [1023, 4096, 65536] {
            let (a, b) = UniformInts::default().generate_pair(size, &mut rng);
            let (scalar, wide, narrow) = all_three(&a, &b);
            assert_relative_eq!(wide, scalar, max_relative = 1e-3);
            assert_relative_eq!(narrow, scalar, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_length_mismatch_rejected_by_every_strategy() {
        let short = [1.0f32, 2.0, 3.0];
        let long = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        assert!(matches!(
            NarrowDpps.dot(&short, &long),
            Err(Error::LengthMismatch { left: 3, right: 5 })
        ));
        assert!(matches!(
            WideAvx.dot(&[1, 2, 3], &[1, 2, 3, 4, 5]),
            Err(Error::LengthMismatch { left: 3, right: 5 })
        ));
        assert!(matches!(
            Scalar.dot(&[1, 2, 3, 4, 5], &[1, 2, 3]),
            Err(Error::LengthMismatch { left: 5, right: 3 })
        ));
    }

    #[test]
    fn test_measure_once_propagates_mismatch() {
        let err = measure_once(&NarrowDpps, &[1.0; 3], &[2.0; 5]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn test_measure_once_records_size_and_result() {
        let sample = measure_once(&NarrowDpps, &[1.0; 64], &[2.0; 64]).unwrap();
        assert_eq!(sample.size, 64);
        assert_eq!(sample.result, 128.0);
    }

    #[test]
    fn test_sweep_emits_one_line_per_size() {
        let mut out = Vec::new();
        let mut rng = input_rng(Some(1));
        let sizes = sweep_sizes();
        run_sweep(&WideAvx, &UniformInts::default(), &sizes, &mut rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        for (line, size) in lines.iter().zip(&sizes) {
            assert!(line.starts_with(&format!("Vector size: {},", size)), "{}", line);
            assert!(line.ends_with("microseconds"), "{}", line);
        }
    }

    #[test]
    fn test_sweep_with_constant_floats() {
        let mut out = Vec::new();
        let mut rng = input_rng(Some(16));
        run_sweep(&NarrowDpps, &ConstantFloats::default(), &[16, 17], &mut rng, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    /// Reports an 8-lane strategy as running without hardware support.
    struct EmulatedWide;

    impl DotProduct for EmulatedWide {
        type Elem = i32;
        const LANES: usize = 8;

        fn name(&self) -> &'static str {
            "emulated-wide"
        }

        fn description(&self) -> &'static str {
            "8-lane emulation only"
        }

        fn backend(&self) -> &'static str {
            "portable"
        }

        fn compute(&self, pair: InputPair<'_, i32>) -> f64 {
            f64::from(dot_product_lanes8(pair))
        }
    }

    #[test]
    fn test_portable_fallback_is_warned_once_per_sweep() {
        let warning = portable_fallback_warning(&EmulatedWide).expect("portable backend warns");
        assert!(warning.contains("emulated-wide") && warning.contains("8-lane"), "{}", warning);

        // Scalar has no SIMD path to fall back from
        assert!(portable_fallback_warning(&Scalar).is_none());

        let expected_wide = (WideAvx.backend() == "portable").then_some(());
        assert_eq!(portable_fallback_warning(&WideAvx).map(|_| ()), expected_wide);
        let expected_narrow = (NarrowDpps.backend() == "portable").then_some(());
        assert_eq!(portable_fallback_warning(&NarrowDpps).map(|_| ()), expected_narrow);

        let mut out = Vec::new();
        let mut rng = input_rng(Some(8));
        run_sweep(&EmulatedWide, &UniformInts::default(), &[9, 16], &mut rng, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_wide_exactness_bounded_by_f32_mantissa() {
        // Products up to 2^24 stay exact below the lane width
        assert_eq!(WideAvx.dot(&[1 << 24], &[1]).unwrap(), Scalar.dot(&[1 << 24], &[1]).unwrap());
        // 2^24 + 1 has no f32 representation
        let scalar = Scalar.dot(&[(1 << 24) + 1], &[1]).unwrap();
        let wide = WideAvx.dot(&[(1 << 24) + 1], &[1]).unwrap();
        assert_eq!(scalar, 16_777_217.0);
        assert_eq!(wide, 16_777_216.0);
    }
}
