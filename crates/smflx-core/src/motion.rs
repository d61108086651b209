//! Presentation helpers shared by revealing sections.

/// Transition delay for the `index`-th item of a staggered grid.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// CSS `transition-delay` value for a staggered item.
pub fn stagger_delay_css(index: usize, step_ms: u32) -> String {
    format!("{}ms", stagger_delay_ms(index, step_ms))
}

/// One word of a display heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleWord<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Split a heading into words, emphasizing the second one.
///
/// "Being Single Eyed" renders as "Being *Single* Eyed".
pub fn title_words(title: &str) -> Vec<TitleWord<'_>> {
    title
        .split_whitespace()
        .enumerate()
        .map(|(i, text)| TitleWord {
            text,
            emphasized: i == 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 150), 0);
        assert_eq!(stagger_delay_ms(3, 150), 450);
        assert_eq!(stagger_delay_ms(2, 100), 200);
        assert_eq!(stagger_delay_css(1, 100), "100ms");
    }

    #[test]
    fn test_stagger_delay_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX, 150), u32::MAX);
    }

    #[test]
    fn test_title_words_emphasize_second() {
        let words = title_words("Being Single Eyed");
        let emphasized: Vec<_> = words.iter().filter(|w| w.emphasized).map(|w| w.text).collect();
        assert_eq!(words.len(), 3);
        assert_eq!(emphasized, vec!["Single"]);
    }

    #[test]
    fn test_title_words_single_word() {
        let words = title_words("Gallery");
        assert_eq!(
            words,
            vec![TitleWord {
                text: "Gallery",
                emphasized: false
            }]
        );
    }

    #[test]
    fn test_title_words_collapses_whitespace() {
        let words = title_words("  A   Godly Family ");
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text, "Godly");
        assert!(words[1].emphasized);
    }
}
