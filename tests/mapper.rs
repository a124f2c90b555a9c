mod tests {
    use lumen_fixture::audio::map_to_color;
    use lumen_fixture::config::ADC_REFERENCE_MAX;
    use lumen_fixture::Rgb;

    #[test]
    fn test_low_band_is_red() {
        let color = map_to_color(250.0, 2048.0, ADC_REFERENCE_MAX);
        assert_eq!(color, Rgb { r: 127, g: 0, b: 0 });
    }

    #[test]
    fn test_mid_band_is_green() {
        let color = map_to_color(500.0, 2048.0, ADC_REFERENCE_MAX);
        assert_eq!(color, Rgb { r: 0, g: 127, b: 0 });
    }

    #[test]
    fn test_high_band_is_blue() {
        let color = map_to_color(2000.0, 2048.0, ADC_REFERENCE_MAX);
        assert_eq!(color, Rgb { r: 0, g: 0, b: 127 });
    }

    #[test]
    fn test_band_edges() {
        assert!(map_to_color(299.9, 4096.0, ADC_REFERENCE_MAX).r > 0);
        assert!(map_to_color(300.0, 4096.0, ADC_REFERENCE_MAX).g > 0);
        assert!(map_to_color(999.9, 4096.0, ADC_REFERENCE_MAX).g > 0);
        assert!(map_to_color(1000.0, 4096.0, ADC_REFERENCE_MAX).b > 0);
    }

    #[test]
    fn test_intensity_is_monotonic_and_saturates() {
        let mut previous = 0;
        for step in 0..=100 {
            let magnitude = step as f32 * 100.0;
            let red = map_to_color(100.0, magnitude, ADC_REFERENCE_MAX).r;
            assert!(red >= previous);
            previous = red;
        }
        assert_eq!(previous, 255);
        assert_eq!(map_to_color(100.0, 1.0e9, ADC_REFERENCE_MAX).r, 255);
        assert_eq!(map_to_color(100.0, 0.0, ADC_REFERENCE_MAX).r, 0);
    }
}
