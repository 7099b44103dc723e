use passforge::error::ConfigError;
use passforge::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_generate_password_default_policy() {
        let policy = Policy::default();
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_generate_password_custom_policy() {
        let policy = Policy {
            length: 20,
            include_upper: false,
            include_lower: true,
            include_digits: true,
            include_symbols: false,
            exclude_ambiguous: false,
        };
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 20);
        assert!(!password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_length_extends_to_class_count() {
        // Coverage takes priority: 4 enabled classes beat a requested
        // length of 2.
        let policy = Policy {
            length: 2,
            ..Default::default()
        };
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 4);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_length_equal_to_class_count() {
        let policy = Policy {
            length: 4,
            ..Default::default()
        };
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 4);
    }

    #[test]
    fn test_no_classes_enabled_fails() {
        let policy = Policy {
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            generate_password(&policy),
            Err(ConfigError::NoClassesEnabled)
        );
    }

    #[test]
    fn test_exclude_ambiguous_characters() {
        let policy = Policy {
            length: 64,
            exclude_ambiguous: true,
            ..Default::default()
        };
        let password = generate_password(&policy).unwrap();
        assert!(!password.chars().any(|c| AMBIGUOUS_CHARS.contains(&c)));
    }

    #[test]
    fn test_pool_construction_is_deterministic() {
        let policy = Policy {
            exclude_ambiguous: true,
            ..Default::default()
        };
        let first = CharacterPool::from_policy(&policy).unwrap();
        let second = CharacterPool::from_policy(&policy).unwrap();
        assert_eq!(first.class_count(), second.class_count());
        for (a, b) in first.classes().iter().zip(second.classes()) {
            let a: BTreeSet<char> = a.iter().copied().collect();
            let b: BTreeSet<char> = b.iter().copied().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_pool_union_is_disjoint() {
        let pool = CharacterPool::from_policy(&Policy::default()).unwrap();
        let union = pool.union();
        let unique: BTreeSet<char> = union.iter().copied().collect();
        assert_eq!(union.len(), unique.len());
        assert_eq!(union.len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn test_pool_ambiguous_exclusion_shrinks_union() {
        let policy = Policy {
            exclude_ambiguous: true,
            ..Default::default()
        };
        let pool = CharacterPool::from_policy(&policy).unwrap();
        // O, 0, I, l, 1 removed, one from each affected class.
        assert_eq!(pool.union().len(), 26 + 26 + 10 + SYMBOLS.len() - 5);
        for class in pool.classes() {
            assert!(!class.is_empty());
        }
    }

    #[test]
    fn test_single_class_password() {
        let policy = Policy {
            length: 10,
            include_upper: false,
            include_lower: false,
            include_digits: true,
            include_symbols: false,
            exclude_ambiguous: false,
        };
        let password = generate_password(&policy).unwrap();
        assert_eq!(password.chars().count(), 10);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }
}
