use blue_planet::math::{format_matrix, reflect, refract, translation, translation_report, vectors_report};
use glam::{Mat4, Vec3, Vec4};

#[cfg(test)]
mod math_tests {
    use super::*;

    #[test]
    fn test_translation_moves_points_not_directions() {
        let m = translation(Vec3::splat(10.0));
        assert_eq!(m * Vec4::new(10.0, 10.0, 10.0, 1.0), Vec4::new(20.0, 20.0, 20.0, 1.0));
        assert_eq!(m * Vec4::new(10.0, 10.0, 10.0, 0.0), Vec4::new(10.0, 10.0, 10.0, 0.0));
    }

    #[test]
    fn test_translation_column_is_last_printed_column() {
        let text = format_matrix(&translation(Vec3::new(1.0, 2.0, 3.0)));
        let last_column: Vec<&str> = text
            .lines()
            .map(|line| line.split_whitespace().last().unwrap_or_default())
            .collect();
        assert_eq!(last_column, vec!["1.0000", "2.0000", "3.0000", "1.0000"]);
    }

    #[test]
    fn test_format_matrix_has_four_rows_of_four() {
        let text = format_matrix(&Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.split_whitespace().count() == 4));
    }

    #[test]
    fn test_translation_report_shows_both_results() {
        let report = translation_report();
        assert!(report.contains("Translation Matrix"));
        assert!(report.contains("-> [20, 20, 20, 1]"));
        assert!(report.contains("-> [10, 10, 10, 0]"));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let incident = Vec3::new(0.3, -0.8, 0.5);
        let r = reflect(incident, Vec3::Y);
        assert!((r.length() - incident.length()).abs() < 1e-6);
        assert!(r.y > 0.0);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser_medium() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = refract(incident, Vec3::Y, 1.0 / 1.5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(r.x.abs() < incident.x.abs());
    }

    #[test]
    fn test_vectors_report_sections() {
        let report = vectors_report();
        for section in ["Constructors", "Components", "Swizzle", "Operations"] {
            assert!(report.contains(section), "missing {section}");
        }
    }
}
