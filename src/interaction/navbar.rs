/// In-page sections the navbar can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Services,
    Faq,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Faq,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Faq => "faq",
            Anchor::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAVBAR_SCROLL_THRESHOLD;

    #[test]
    fn scrolled_flag_follows_offset() {
        let offsets = [0.0, 51.0, 10.0];
        let flags: Vec<bool> = offsets
            .iter()
            .map(|&offset| is_scrolled(offset, NAVBAR_SCROLL_THRESHOLD))
            .collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        assert!(!is_scrolled(50.0, NAVBAR_SCROLL_THRESHOLD));
        assert!(is_scrolled(50.5, NAVBAR_SCROLL_THRESHOLD));
    }

    #[test]
    fn anchors_resolve_by_id() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(Anchor::Faq.href(), "#faq");
        assert_eq!(Anchor::from_id("pricing"), None);
    }
}
