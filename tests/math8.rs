mod tests {
    use lumen_fixture::math8::{blend8, ratio8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_ratio8() {
        assert_eq!(ratio8(0.0), 0);
        assert_eq!(ratio8(0.5), 127);
        assert_eq!(ratio8(1.0), 255);
        assert_eq!(ratio8(17.0), 255);
        assert_eq!(ratio8(-1.0), 0);
        assert_eq!(ratio8(f32::NAN), 0);
    }
}
