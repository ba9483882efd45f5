//! Selection updates for dropdown facets.
//!
//! Each function returns the full new selection to commit; the committed
//! selection itself is never mutated here.


/// Adds `option` if it is not selected, removes it otherwise.
pub fn toggle_option(selected: &[String], option: &str) -> Vec<String> {
    if selected.iter().any(|s| s == option) {
        remove_option(selected, option)
    } else {
        let mut next = selected.to_vec();
        next.push(option.to_string());
        next
    }
}

/// Removing a chip. Removing the last option yields an empty selection.
pub fn remove_option(selected: &[String], option: &str) -> Vec<String> {
    selected.iter().filter(|s| s.as_str() != option).cloned().collect()
}

pub fn is_selected(selected: &[String], option: &str) -> bool {
    selected.iter().any(|s| s == option)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appends_in_selection_order() {
        let selected = toggle_option(&[], "Red");
        let selected = toggle_option(&selected, "Blue");
        assert_eq!(selected, vec!["Red".to_string(), "Blue".to_string()]);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let before = vec!["Green".to_string()];
        let after = toggle_option(&toggle_option(&before, "Red"), "Red");
        assert_eq!(after, before);
    }

    #[test]
    fn removing_last_option_yields_empty() {
        let selected = vec!["Red".to_string()];
        assert!(toggle_option(&selected, "Red").is_empty());
        assert!(remove_option(&selected, "Red").is_empty());
    }

    #[test]
    fn remove_unknown_option_is_noop() {
        let selected = vec!["Red".to_string(), "Blue".to_string()];
        assert_eq!(remove_option(&selected, "Green"), selected);
        assert!(is_selected(&selected, "Blue"));
        assert!(!is_selected(&selected, "Green"));
    }
}
