use yew::prelude::*;

/// `base` plus `visible` once the element has been revealed.
pub fn reveal_classes(base: &'static str, visible: bool) -> Classes {
    classes!(base, visible.then_some("visible"))
}

/// Inline style that staggers card transitions by `index * step_secs`.
pub fn stagger_style(index: usize, step_secs: f64) -> String {
    format!("transition-delay: {}s;", round_secs(index as f64 * step_secs))
}

fn round_secs(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger_style(0, 0.1), "transition-delay: 0s;");
        assert_eq!(stagger_style(3, 0.1), "transition-delay: 0.3s;");
        assert_eq!(stagger_style(2, 0.15), "transition-delay: 0.3s;");
        assert_eq!(stagger_style(4, 0.05), "transition-delay: 0.2s;");
    }
}
