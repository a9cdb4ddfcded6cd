/// Accordion over `len` entries where at most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    active: Option<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Clicking the open entry closes it, any other entry opens and replaces
    /// the open one. Indices past the end leave the state untouched.
    pub fn toggled(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { active, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let faq = FaqAccordion::new(5);
        assert_eq!(faq.active(), None);
        assert!((0..5).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn clicking_twice_collapses() {
        let faq = FaqAccordion::new(5).toggled(2);
        assert_eq!(faq.active(), Some(2));
        assert_eq!(faq.toggled(2).active(), None);
    }

    #[test]
    fn opening_another_closes_previous() {
        let faq = FaqAccordion::new(5).toggled(2).toggled(4);
        assert_eq!(faq.active(), Some(4));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let faq = FaqAccordion::new(5).toggled(1);
        assert_eq!(faq.toggled(5), faq);
        assert_eq!(FaqAccordion::new(0).toggled(0).active(), None);
    }
}
