use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tkpass::sentence::*;
use tkpass::wordlist::default_wordlist;
use tkpass::TransformError;

fn words() -> Vec<String> {
    ["apple", "avocado", "banana", "cherry", "dune", "echo"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_password() {
        assert_eq!(derive_password("Hello World 2024!").unwrap(), "HW2024!");
        assert_eq!(derive_password("Lorem ipsum dolor 66 sit amet!").unwrap(), "Lid66sa!");
        assert_eq!(tkpass::derive_password_from_sentence("Hello World 2024!").unwrap(), "HW2024!");
    }

    #[test]
    fn test_derive_password_edge_cases() {
        // 首字符不是字母
        assert_eq!(derive_password(" hello").unwrap(), "h");
        assert_eq!(derive_password("3 little pigs").unwrap(), "3lp");
        // 连续空格只取字母前的那个
        assert_eq!(derive_password("a  b").unwrap(), "ab");
        assert_eq!(derive_password("£5 each").unwrap(), "£5e");
        assert_eq!(derive_password("trailing space ").unwrap(), "ts");
        assert_eq!(derive_password("x").unwrap(), "x");
    }

    #[test]
    fn test_derive_password_empty() {
        assert_eq!(
            derive_password(""),
            Err(TransformError::EmptyInput { what: "sentence" })
        );
    }

    #[test]
    fn test_reconstruct_sentence() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let list = words();
        let sentence = reconstruct_sentence("Ab3!", &list, &mut rng).unwrap();
        assert!(sentence.ends_with(' '));

        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].starts_with('A'));
        assert!(list.contains(&tokens[0].to_lowercase()));
        assert_eq!(tokens[1], "banana");
        assert_eq!(tokens[2], "3");
        assert_eq!(tokens[3], "!");
    }

    #[test]
    fn test_reconstruct_falls_back_to_letter() {
        let mut rng = ChaCha20Rng::seed_from_u64(22);
        let sentence = reconstruct_sentence("zD", &words(), &mut rng).unwrap();
        assert_eq!(sentence, "z Dune ");
    }

    #[test]
    fn test_reconstruct_drops_unknown_characters() {
        let mut rng = ChaCha20Rng::seed_from_u64(23);
        let sentence = reconstruct_sentence("c/e", &words(), &mut rng).unwrap();
        assert_eq!(sentence, "cherry echo ");
    }

    #[test]
    fn test_reconstruct_multiple_lines() {
        let mut rng = ChaCha20Rng::seed_from_u64(24);
        let sentence = reconstruct_sentence("b1\nc2", &words(), &mut rng).unwrap();
        assert_eq!(sentence, "banana 1 \ncherry 2 ");
    }

    #[test]
    fn test_reconstruct_ignores_empty_words() {
        let mut rng = ChaCha20Rng::seed_from_u64(25);
        let list = vec![String::new(), "echo".to_string()];
        assert_eq!(reconstruct_sentence("eq", &list, &mut rng).unwrap(), "echo q ");
    }

    #[test]
    fn test_reconstruct_invalid_input() {
        let mut rng = ChaCha20Rng::seed_from_u64(26);
        assert_eq!(
            reconstruct_sentence("", &words(), &mut rng),
            Err(TransformError::EmptyInput { what: "password" })
        );
        assert_eq!(
            reconstruct_sentence("abc", &[], &mut rng),
            Err(TransformError::EmptyWordList)
        );
    }

    #[test]
    fn test_round_trip_resolves_every_initial() {
        let list = default_wordlist();
        let password = derive_password("My cat Felix turned 7 in June, 2019!").unwrap();
        assert_eq!(password, "McFt7iJ,2019!");

        let sentence = tkpass::reconstruct_sentence_from_password(&password, &list).unwrap();
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        assert_eq!(tokens.len(), password.chars().count());
        for (c, token) in password.chars().zip(tokens) {
            if c.is_ascii_alphabetic() {
                let first = token.chars().next().unwrap();
                assert_eq!(first, c, "{} -> {}", c, token);
                assert!(list.contains(&token.to_lowercase()));
            } else {
                assert_eq!(token, c.to_string());
            }
        }
    }
}
