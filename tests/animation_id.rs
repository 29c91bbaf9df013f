mod tests {
    use shakecube_matrix::{AnimationId, Rng};

    #[test]
    fn test_animation_id_raw_round_trip() {
        for raw in 0..=11 {
            let id = AnimationId::from_raw(raw).unwrap();
            assert_eq!(id.as_raw(), raw);
        }
        assert_eq!(AnimationId::from_raw(12), None);
    }

    #[test]
    fn test_animation_id_names() {
        assert_eq!(AnimationId::Spiral.as_str(), "spiral");
        assert_eq!(AnimationId::MatrixRain.as_str(), "matrix_rain");
        assert_eq!(
            AnimationId::parse_from_str("pac_man"),
            Some(AnimationId::PacMan)
        );
        assert_eq!(
            AnimationId::parse_from_str("hyperspace"),
            Some(AnimationId::Hyperspace)
        );
        assert_eq!(AnimationId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_pool_excludes_boot_sequence() {
        assert_eq!(AnimationId::POOL.len(), 11);
        assert!(!AnimationId::POOL.contains(&AnimationId::Hyperspace));
        assert!(!AnimationId::Hyperspace.is_pooled());
        assert!(AnimationId::POOL.iter().all(|id| id.is_pooled()));
    }

    #[test]
    fn test_slot_matches_id() {
        let mut rng = Rng::new(7);
        for raw in 0..=11 {
            let id = AnimationId::from_raw(raw).unwrap();
            assert_eq!(id.to_slot(&mut rng).id(), id);
        }
    }
}
