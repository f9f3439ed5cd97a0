use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tkpass::passgen::{generate_password, GenerationSpec};
use tkpass::strength::*;
use tkpass::wordlist::NamedWordList;
use tkpass::CheckError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_rejected() {
        assert_eq!(
            assess_password_strength("", &[], &[]).unwrap_err(),
            CheckError::EmptyPassword
        );
    }

    #[test]
    fn test_common_password_is_weak() {
        let report = assess_password_strength("password", &[], &[]).unwrap();
        assert!(report.score <= 1);
        assert_eq!(report.rating, "Very weak");
        assert!(report.warning.is_some() || !report.suggestions.is_empty());
        assert!(!report.crack_times.online_throttling.is_empty());
    }

    #[test]
    fn test_long_random_password_is_strong() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let spec = GenerationSpec {
            total_length: Some(32),
            ..GenerationSpec::default()
        };
        let password = generate_password(&spec, &mut rng).unwrap();
        let report = assess_password_strength(&password, &[], &[]).unwrap();
        assert_eq!(report.score, 4);
        assert_eq!(report.rating, "Strong");
    }

    #[test]
    fn test_hints_lower_the_score() {
        let hints = vec!["rosalindfairweather".to_string()];
        let without = assess_password_strength("rosalindfairweather", &[], &[]).unwrap();
        let with = assess_password_strength("rosalindfairweather", &hints, &[]).unwrap();
        assert!(with.score <= without.score);
        assert!(with.score <= 1);
    }

    #[test]
    fn test_short_password_advice() {
        let advice = password_advice("abc123");
        assert_eq!(advice.len(), 2);
        assert!(advice[0].contains("much too short"));
        assert_eq!(advice[1], "The numbers are not dispersed properly.");
    }

    #[test]
    fn test_clustered_suffix_advice() {
        let advice = password_advice("correcthorse1!");
        assert_eq!(
            advice,
            vec!["Numbers and special characters are not scattered correctly.".to_string()]
        );
    }

    #[test]
    fn test_special_prefix_advice() {
        let advice = password_advice("!abcdefghijklmn1x");
        assert_eq!(
            advice,
            vec!["Special characters are not scattered correctly.".to_string()]
        );
    }

    #[test]
    fn test_dispersed_password_has_no_advice() {
        assert!(password_advice("ab1cd!ef9ghijkl").is_empty());
    }

    #[test]
    fn test_all_digit_password_advice() {
        let advice = password_advice("12345678");
        assert_eq!(advice.len(), 2);
        assert!(advice[0].starts_with("A minimum length of 14"));
        assert_eq!(advice[1], "The numbers are not dispersed properly.");
    }

    #[test]
    fn test_builtin_dictionary_exposure() {
        let report = assess_password_strength("password123", &[], &[]).unwrap();
        assert!(
            report
                .exposures
                .iter()
                .any(|e| e.dictionary == "Passwords" && "password123".contains(e.word.as_str())),
            "{:?}",
            report.exposures
        );
    }

    #[test]
    fn test_hint_exposure() {
        let hints = vec!["xqzvbrtmplk".to_string()];
        let report = assess_password_strength("xqzvbrtmplk", &hints, &[]).unwrap();
        assert_eq!(
            report.exposures,
            vec![Exposure {
                word: "xqzvbrtmplk".to_string(),
                dictionary: "user inputs".to_string(),
            }]
        );
    }

    #[test]
    fn test_named_word_list_exposure() {
        let dictionaries = vec![
            NamedWordList {
                name: "family".to_string(),
                words: vec!["alice".to_string()],
            },
            NamedWordList {
                name: "pets".to_string(),
                words: vec!["rex".to_string(), "Xqzvbrtmplk".to_string()],
            },
        ];
        let report = assess_password_strength("xqzvbrtmplk", &[], &dictionaries).unwrap();
        assert_eq!(
            report.exposures,
            vec![Exposure {
                word: "xqzvbrtmplk".to_string(),
                dictionary: "pets".to_string(),
            }]
        );
    }
}
