mod tests {
    use lumen_fixture::color::{
        Rgb, blend_colors, hue_to_hue8, kelvin_to_mireds, kelvin_to_rgb, mireds_to_kelvin,
        mireds_to_rgb, scale_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_kelvin_to_rgb() {
        assert_eq!(kelvin_to_rgb(1000), Rgb { r: 255, g: 67, b: 0 });
        assert_eq!(
            kelvin_to_rgb(4000),
            Rgb {
                r: 255,
                g: 205,
                b: 166
            }
        );
        assert_eq!(
            kelvin_to_rgb(40000),
            Rgb {
                r: 151,
                g: 185,
                b: 255
            }
        );
    }

    #[test]
    fn test_kelvin_to_rgb_warms_smoothly() {
        let mut previous = kelvin_to_rgb(1000);
        for kelvin in (1100..=6600).step_by(100) {
            let color = kelvin_to_rgb(kelvin);
            assert!(color.g >= previous.g, "green drops at {kelvin}K");
            assert!(color.b >= previous.b, "blue drops at {kelvin}K");
            assert!(
                color.g - previous.g <= 12,
                "green jumps at {kelvin}K: {} -> {}",
                previous.g,
                color.g
            );
            previous = color;
        }
    }

    #[test]
    fn test_mireds_to_kelvin_clamps() {
        assert_eq!(mireds_to_kelvin(250), 4000);
        assert_eq!(mireds_to_kelvin(50), 10_000);
        assert_eq!(mireds_to_kelvin(2000), 1000);
        assert_eq!(mireds_to_kelvin(0), 10_000);
    }

    #[test]
    fn test_mireds_round_trip() {
        for mireds in 100..=1000 {
            let kelvin = mireds_to_kelvin(mireds);
            let back = kelvin_to_mireds(kelvin);
            assert!(
                back.abs_diff(mireds) <= 1,
                "{mireds} mireds -> {kelvin} K -> {back} mireds"
            );
        }
    }

    #[test]
    fn test_mireds_to_rgb_matches_kelvin() {
        assert_eq!(mireds_to_rgb(250), kelvin_to_rgb(4000));
        assert_eq!(mireds_to_rgb(1000), kelvin_to_rgb(1000));
    }

    #[test]
    fn test_hue_to_hue8() {
        assert_eq!(hue_to_hue8(0), 0);
        assert_eq!(hue_to_hue8(180), 128);
        assert_eq!(hue_to_hue8(359), 255);
        assert_eq!(hue_to_hue8(360), 0);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), BLACK);
        assert_eq!(scale_color(RED, 128), Rgb { r: 128, g: 0, b: 0 });
    }
}
